use serde::Serialize;

use crate::error::LedgerError;

/// Day of month the fixed income event lands on.
pub const PAYDAY: u32 = 25;

/// Chance that a given day has any incidental activity at all.
pub const ACTIVITY_PROBABILITY: f64 = 0.6;

/// Chance that an incidental transaction is a deposit rather than a withdrawal.
pub const INCIDENTAL_DEPOSIT_PROBABILITY: f64 = 0.2;

/// Incidental transactions per active day, inclusive bounds.
pub const MIN_TX_PER_ACTIVE_DAY: u32 = 1;
pub const MAX_TX_PER_ACTIVE_DAY: u32 = 3;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AccountKind {
    Personal,
    Corporate,
}

impl AccountKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Corporate => "corporate",
        }
    }

    /// Label used in statement header blocks, matching the source UI wording.
    pub const fn label_ja(self) -> &'static str {
        match self {
            Self::Personal => "個人口座",
            Self::Corporate => "法人口座",
        }
    }

    pub fn from_cli_value(value: &str) -> Result<Self, LedgerError> {
        match value {
            "personal" => Ok(Self::Personal),
            "corporate" => Ok(Self::Corporate),
            other => Err(LedgerError::invalid_argument(&format!(
                "Unknown account kind `{other}`. Expected `personal` or `corporate`."
            ))),
        }
    }

    pub const fn profile(self) -> &'static AccountProfile {
        match self {
            Self::Personal => &PERSONAL_PROFILE,
            Self::Corporate => &CORPORATE_PROFILE,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Deposit,
    Withdrawal,
}

impl Direction {
    pub const fn label_ja(self) -> &'static str {
        match self {
            Self::Deposit => "入金",
            Self::Withdrawal => "出金",
        }
    }
}

/// A calendar-pinned transaction that fires once on its day, every month.
#[derive(Debug, Clone, Copy)]
pub struct FixedEvent {
    pub description: &'static str,
    pub direction: Direction,
    pub amount_min: i64,
    pub amount_max: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct AccountProfile {
    pub kind: AccountKind,
    /// Fires on day 25.
    pub payday: FixedEvent,
    /// Fires on the last calendar day of each month.
    pub month_end: FixedEvent,
    pub deposit_descriptions: &'static [&'static str],
    pub withdrawal_descriptions: &'static [&'static str],
    pub incidental_deposit_min: i64,
    pub incidental_deposit_max: i64,
    pub incidental_withdrawal_min: i64,
    pub incidental_withdrawal_max: i64,
}

// Description pools keep the half-width katakana forms banks actually print.
const PERSONAL_WITHDRAWALS: [&str; 8] = [
    "ｺﾝﾋﾞﾆ",
    "ｽｰﾊﾟｰﾏｰｹｯﾄ",
    "ｱﾏｿﾞﾝ ｶｽﾀﾏｰ",
    "ﾕﾆｸﾛ",
    "ﾈｯﾄﾌﾘｯｸｽ",
    "ﾄﾞｺﾓ ｹｰﾀｲ",
    "東京電力",
    "水道局",
];

const PERSONAL_DEPOSITS: [&str; 3] = ["ﾌﾘｺﾐ ｶ) ﾃｽﾄ", "ﾒﾙｶﾘ ｳﾘｱｹﾞ", "利息"];

const CORPORATE_WITHDRAWALS: [&str; 6] = [
    "ｼｲﾚ ｶ) ｻﾝﾌﾟﾙｼﾖｳｼﾞ",
    "ｼｽﾃﾑ ﾘﾖｳﾘﾖｳ",
    "ｺｳｺｸﾋ",
    "ｼﾞﾑﾖｳﾋﾝ",
    "東京電力",
    "水道局",
];

const CORPORATE_DEPOSITS: [&str; 3] = ["ｳﾘｱｹﾞ ｶ) ﾄﾘﾋｷｻｷ", "ﾌﾘｺﾐ ｶ) ｻﾝﾌﾟﾙ", "利息"];

pub static PERSONAL_PROFILE: AccountProfile = AccountProfile {
    kind: AccountKind::Personal,
    payday: FixedEvent {
        description: "ｷﾞﾖｳﾖ",
        direction: Direction::Deposit,
        amount_min: 250_000,
        amount_max: 400_000,
    },
    month_end: FixedEvent {
        description: "ｼﾞﾕｳｷﾖﾋ/ﾌﾘｺﾐ",
        direction: Direction::Withdrawal,
        amount_min: 50_000,
        amount_max: 150_000,
    },
    deposit_descriptions: &PERSONAL_DEPOSITS,
    withdrawal_descriptions: &PERSONAL_WITHDRAWALS,
    incidental_deposit_min: 1_000,
    incidental_deposit_max: 50_000,
    incidental_withdrawal_min: 100,
    incidental_withdrawal_max: 20_000,
};

pub static CORPORATE_PROFILE: AccountProfile = AccountProfile {
    kind: AccountKind::Corporate,
    payday: FixedEvent {
        description: "ｳﾘｱｹﾞﾆﾕｳｷﾝ",
        direction: Direction::Deposit,
        amount_min: 1_000_000,
        amount_max: 3_000_000,
    },
    month_end: FixedEvent {
        description: "ｷﾞﾖｳﾖﾌﾘｺﾐ/ﾔﾁﾝ",
        direction: Direction::Withdrawal,
        amount_min: 500_000,
        amount_max: 1_500_000,
    },
    deposit_descriptions: &CORPORATE_DEPOSITS,
    withdrawal_descriptions: &CORPORATE_WITHDRAWALS,
    incidental_deposit_min: 10_000,
    incidental_deposit_max: 500_000,
    incidental_withdrawal_min: 1_000,
    incidental_withdrawal_max: 200_000,
};
