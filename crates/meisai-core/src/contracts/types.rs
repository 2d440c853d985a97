use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatementRowData {
    pub date: String,
    pub description: String,
    pub deposit: i64,
    pub withdrawal: i64,
    pub balance: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementSummary {
    pub from: String,
    pub to: String,
    pub opening_balance: i64,
    pub closing_balance: i64,
    pub total_deposits: i64,
    pub total_withdrawals: i64,
    pub row_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementData {
    pub account_kind: String,
    pub layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub truncated: bool,
    pub summary: StatementSummary,
    pub rows: Vec<StatementRowData>,
    pub suggested_file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_written: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
    pub month: String,
    pub file_name: String,
    pub opening_balance: i64,
    pub closing_balance: i64,
    pub row_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchData {
    pub account_kind: String,
    pub layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub summary: StatementSummary,
    pub months: Vec<MonthSummary>,
    pub suggested_file_name: String,
    pub out_path: String,
    pub bytes_written: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FixedEventData {
    pub description: String,
    pub direction: String,
    pub amount_min: i64,
    pub amount_max: i64,
    pub schedule: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileData {
    pub kind: String,
    pub label: String,
    pub payday: FixedEventData,
    pub month_end: FixedEventData,
    pub deposit_descriptions: Vec<String>,
    pub withdrawal_descriptions: Vec<String>,
    pub incidental_deposit_range: [i64; 2],
    pub incidental_withdrawal_range: [i64; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfilesData {
    pub profiles: Vec<ProfileData>,
}
