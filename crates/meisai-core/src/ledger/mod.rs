pub mod monthly;

use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::GenerationParams;
use crate::profile::{
    ACTIVITY_PROBABILITY, AccountKind, AccountProfile, Direction, FixedEvent,
    INCIDENTAL_DEPOSIT_PROBABILITY, MAX_TX_PER_ACTIVE_DAY, MIN_TX_PER_ACTIVE_DAY, PAYDAY,
};

/// One statement line. Exactly one of `deposit`/`withdrawal` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub date: NaiveDate,
    pub description: String,
    pub deposit: i64,
    pub withdrawal: i64,
    pub balance: i64,
}

impl TransactionRow {
    pub const fn direction(&self) -> Direction {
        if self.deposit > 0 {
            Direction::Deposit
        } else {
            Direction::Withdrawal
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ledger {
    pub kind: AccountKind,
    pub opening_balance: i64,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub rows: Vec<TransactionRow>,
    /// True when `max_rows` dropped leading rows from the generated set.
    pub truncated: bool,
}

impl Ledger {
    pub fn closing_balance(&self) -> i64 {
        self.rows
            .last()
            .map_or(self.opening_balance, |row| row.balance)
    }

    pub fn total_deposits(&self) -> i64 {
        self.rows.iter().map(|row| row.deposit).sum()
    }

    pub fn total_withdrawals(&self) -> i64 {
        self.rows.iter().map(|row| row.withdrawal).sum()
    }
}

/// Generates the full ledger for the resolved parameters.
///
/// Walks the range day by day. Fixed calendar events fire exactly once on
/// their day (payday on the 25th, fixed costs on the last day of the month);
/// incidental rows ride on a per-day activity roll. The running balance
/// carries across every row and may go negative.
pub fn generate(params: &GenerationParams) -> Ledger {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_with_rng(params, &mut rng)
}

pub fn generate_with_rng(params: &GenerationParams, rng: &mut StdRng) -> Ledger {
    let profile = params.kind.profile();
    let mut rows = Vec::new();
    let mut balance = params.initial_balance;

    let mut date = params.from;
    while date <= params.to {
        if date.day() == PAYDAY {
            push_fixed(&mut rows, &mut balance, date, &profile.payday, rng);
        }
        if date == last_day_of_month(date) {
            push_fixed(&mut rows, &mut balance, date, &profile.month_end, rng);
        }

        if rng.random_bool(ACTIVITY_PROBABILITY) {
            let count = rng.random_range(MIN_TX_PER_ACTIVE_DAY..=MAX_TX_PER_ACTIVE_DAY);
            for _ in 0..count {
                push_incidental(&mut rows, &mut balance, date, profile, rng);
            }
        }

        date += Duration::days(1);
    }

    let mut truncated = false;
    if let Some(max_rows) = params.max_rows
        && rows.len() > max_rows
    {
        rows.drain(..rows.len() - max_rows);
        truncated = true;
    }

    Ledger {
        kind: params.kind,
        opening_balance: params.initial_balance,
        from: params.from,
        to: params.to,
        rows,
        truncated,
    }
}

fn push_fixed(
    rows: &mut Vec<TransactionRow>,
    balance: &mut i64,
    date: NaiveDate,
    event: &FixedEvent,
    rng: &mut StdRng,
) {
    let amount = rng.random_range(event.amount_min..=event.amount_max);
    push_row(rows, balance, date, event.description, event.direction, amount);
}

fn push_incidental(
    rows: &mut Vec<TransactionRow>,
    balance: &mut i64,
    date: NaiveDate,
    profile: &AccountProfile,
    rng: &mut StdRng,
) {
    if rng.random_bool(INCIDENTAL_DEPOSIT_PROBABILITY) {
        let amount = rng.random_range(profile.incidental_deposit_min..=profile.incidental_deposit_max);
        let description = profile.deposit_descriptions
            [rng.random_range(0..profile.deposit_descriptions.len())];
        push_row(rows, balance, date, description, Direction::Deposit, amount);
    } else {
        let amount = rng
            .random_range(profile.incidental_withdrawal_min..=profile.incidental_withdrawal_max);
        let description = profile.withdrawal_descriptions
            [rng.random_range(0..profile.withdrawal_descriptions.len())];
        push_row(rows, balance, date, description, Direction::Withdrawal, amount);
    }
}

fn push_row(
    rows: &mut Vec<TransactionRow>,
    balance: &mut i64,
    date: NaiveDate,
    description: &str,
    direction: Direction,
    amount: i64,
) {
    let (deposit, withdrawal) = match direction {
        Direction::Deposit => (amount, 0),
        Direction::Withdrawal => (0, amount),
    };
    *balance += deposit - withdrawal;
    rows.push(TransactionRow {
        date,
        description: description.to_string(),
        deposit,
        withdrawal,
        balance: *balance,
    });
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // The first of a month always exists.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first| first - Duration::days(1))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{generate, last_day_of_month};
    use crate::params::GenerationParams;
    use crate::profile::AccountKind;

    fn params(from: &str, to: &str, seed: u64) -> GenerationParams {
        GenerationParams {
            initial_balance: 1_000_000,
            from: from.parse().unwrap(),
            to: to.parse().unwrap(),
            kind: AccountKind::Personal,
            max_rows: None,
            seed: Some(seed),
        }
    }

    #[test]
    fn running_balance_is_cumulative_from_opening() {
        let ledger = generate(&params("2026-01-01", "2026-06-30", 7));
        let mut expected = ledger.opening_balance;
        for row in &ledger.rows {
            expected += row.deposit - row.withdrawal;
            assert_eq!(row.balance, expected);
        }
        assert_eq!(ledger.closing_balance(), expected);
    }

    #[test]
    fn deposit_and_withdrawal_are_mutually_exclusive() {
        let ledger = generate(&params("2026-01-01", "2026-12-31", 11));
        for row in &ledger.rows {
            assert!(row.deposit >= 0 && row.withdrawal >= 0);
            assert!((row.deposit > 0) != (row.withdrawal > 0));
        }
    }

    #[test]
    fn rows_come_out_in_date_order() {
        let ledger = generate(&params("2026-01-01", "2026-12-31", 3));
        for pair in ledger.rows.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn payday_fires_exactly_once_every_month() {
        let ledger = generate(&params("2026-01-01", "2026-06-30", 5));
        for month in 1..=6 {
            let payday = NaiveDate::from_ymd_opt(2026, month, 25).unwrap();
            let salary_rows = ledger
                .rows
                .iter()
                .filter(|row| row.date == payday && row.description == "ｷﾞﾖｳﾖ")
                .count();
            assert_eq!(salary_rows, 1, "month {month}");
        }
    }

    #[test]
    fn fixed_costs_land_on_the_last_calendar_day() {
        let ledger = generate(&params("2026-01-01", "2026-03-31", 5));
        let expected_days = ["2026-01-31", "2026-02-28", "2026-03-31"];
        for day in expected_days {
            let date: NaiveDate = day.parse().unwrap();
            let hits = ledger
                .rows
                .iter()
                .filter(|row| row.date == date && row.description == "ｼﾞﾕｳｷﾖﾋ/ﾌﾘｺﾐ")
                .count();
            assert_eq!(hits, 1, "day {day}");
        }
        let stray = ledger
            .rows
            .iter()
            .filter(|row| row.description == "ｼﾞﾕｳｷﾖﾋ/ﾌﾘｺﾐ")
            .count();
        assert_eq!(stray, 3);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let first = generate(&params("2026-01-01", "2026-03-31", 42));
        let second = generate(&params("2026-01-01", "2026-03-31", 42));
        assert_eq!(first.rows, second.rows);
    }

    #[test]
    fn max_rows_keeps_the_latest_tail() {
        let mut full_params = params("2026-01-01", "2026-12-31", 9);
        let full = generate(&full_params);
        full_params.max_rows = Some(10);
        let capped = generate(&full_params);
        assert!(capped.truncated);
        assert_eq!(capped.rows.len(), 10);
        assert_eq!(capped.rows, full.rows[full.rows.len() - 10..].to_vec());
        assert_eq!(capped.closing_balance(), full.closing_balance());
    }

    #[test]
    fn single_day_range_generates_at_most_that_day() {
        let ledger = generate(&params("2026-04-25", "2026-04-25", 2));
        assert!(!ledger.rows.is_empty());
        for row in &ledger.rows {
            assert_eq!(row.date.to_string(), "2026-04-25");
        }
    }

    #[test]
    fn last_day_of_month_handles_february_and_december() {
        let leap: NaiveDate = "2028-02-10".parse().unwrap();
        assert_eq!(last_day_of_month(leap).to_string(), "2028-02-29");
        let december: NaiveDate = "2026-12-01".parse().unwrap();
        assert_eq!(last_day_of_month(december).to_string(), "2026-12-31");
    }
}
