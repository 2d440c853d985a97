use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::monthly::MonthlyStatement;
use crate::ledger::{TransactionRow, last_day_of_month};
use crate::profile::AccountKind;

/// Byte-order marker prepended to every export so spreadsheet apps pick
/// UTF-8 for the Japanese column headers.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column layout of an exported statement. The three layouts are the
/// surviving shapes of the original near-duplicate pages; all of them end
/// with deposit, withdrawal, balance.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StatementLayout {
    Standard,
    Detailed,
    English,
}

impl StatementLayout {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Detailed => "detailed",
            Self::English => "english",
        }
    }

    pub fn from_cli_value(value: &str) -> LedgerResult<Self> {
        match value {
            "standard" => Ok(Self::Standard),
            "detailed" => Ok(Self::Detailed),
            "english" => Ok(Self::English),
            other => Err(LedgerError::invalid_argument(&format!(
                "Unknown layout `{other}`. Expected `standard`, `detailed`, or `english`."
            ))),
        }
    }

    pub const fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Standard => &["取引日", "摘要", "お預入れ額", "お引き出し額", "差し引き残高"],
            Self::Detailed => &[
                "取引日",
                "取引種別",
                "摘要",
                "通貨",
                "お預入れ額",
                "お引き出し額",
                "差し引き残高",
            ],
            Self::English => &["Date", "Description", "Deposit", "Withdrawal", "Balance"],
        }
    }

    pub fn format_date(self, date: NaiveDate) -> String {
        match self {
            Self::Standard | Self::Detailed => date.format("%Y/%m/%d").to_string(),
            Self::English => date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn render_row(self, row: &TransactionRow) -> Vec<String> {
        let date = self.format_date(row.date);
        match self {
            Self::Standard | Self::English => vec![
                date,
                row.description.clone(),
                row.deposit.to_string(),
                row.withdrawal.to_string(),
                row.balance.to_string(),
            ],
            Self::Detailed => vec![
                date,
                row.direction().label_ja().to_string(),
                row.description.clone(),
                "JPY".to_string(),
                row.deposit.to_string(),
                row.withdrawal.to_string(),
                row.balance.to_string(),
            ],
        }
    }
}

/// Default download name, `bank_statement_YYYYMMDD.csv` of the generation day.
pub fn default_file_name(today: NaiveDate) -> String {
    format!("bank_statement_{}.csv", today.format("%Y%m%d"))
}

/// Renders rows to a BOM-prefixed, comma-delimited statement.
pub fn render_statement_csv(
    rows: &[TransactionRow],
    layout: StatementLayout,
) -> LedgerResult<Vec<u8>> {
    let mut bytes = UTF8_BOM.to_vec();
    bytes.extend_from_slice(&render_records(rows, layout)?);
    Ok(bytes)
}

/// Renders one monthly statement with its descriptive header block before
/// the tabular part. Header lines stay comma-free so the tabular header row
/// is unambiguous to the parse-back path.
pub fn render_monthly_csv(
    statement: &MonthlyStatement,
    kind: AccountKind,
    layout: StatementLayout,
) -> LedgerResult<Vec<u8>> {
    let first = NaiveDate::from_ymd_opt(statement.year, statement.month, 1).ok_or_else(|| {
        LedgerError::internal_export(&format!("invalid statement month {}", statement.key()))
    })?;
    let last = last_day_of_month(first);

    let mut bytes = UTF8_BOM.to_vec();
    let header_block = format!(
        "銀行入出金明細書\n口座種別: {}\n対象期間: {} - {}\n繰越残高: {}\n期末残高: {}\n\n",
        kind.label_ja(),
        layout.format_date(first),
        layout.format_date(last),
        statement.opening_balance,
        statement.closing_balance,
    );
    bytes.extend_from_slice(header_block.as_bytes());
    bytes.extend_from_slice(&render_records(&statement.rows, layout)?);
    Ok(bytes)
}

fn render_records(rows: &[TransactionRow], layout: StatementLayout) -> LedgerResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(layout.headers())
        .map_err(|err| LedgerError::internal_export(&err.to_string()))?;
    for row in rows {
        writer
            .write_record(layout.render_row(row))
            .map_err(|err| LedgerError::internal_export(&err.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|err| LedgerError::internal_export(&err.to_string()))
}

#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub date: String,
    pub deposit: i64,
    pub withdrawal: i64,
    pub balance: i64,
}

#[derive(Debug, Clone)]
pub struct ParsedStatement {
    pub layout: StatementLayout,
    pub rows: Vec<ParsedRow>,
}

impl ParsedStatement {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn closing_balance(&self) -> Option<i64> {
        self.rows.last().map(|row| row.balance)
    }
}

/// Reads back an exported statement, tolerating the BOM and any descriptive
/// header block before the recognized tabular header row.
pub fn parse_statement(bytes: &[u8]) -> LedgerResult<ParsedStatement> {
    let text = std::str::from_utf8(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
        .map_err(|err| LedgerError::internal_export(&format!("statement is not UTF-8: {err}")))?;

    let layouts = [
        StatementLayout::Standard,
        StatementLayout::Detailed,
        StatementLayout::English,
    ];
    let mut found = None;
    for (index, line) in text.lines().enumerate() {
        if let Some(layout) = layouts
            .iter()
            .find(|layout| line == layout.headers().join(","))
        {
            found = Some((index, *layout));
            break;
        }
    }
    let Some((header_index, layout)) = found else {
        return Err(LedgerError::internal_export(
            "no recognized statement header row found",
        ));
    };

    let body = text
        .lines()
        .skip(header_index + 1)
        .collect::<Vec<&str>>()
        .join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(body.as_bytes());

    let column_count = layout.headers().len();
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| LedgerError::internal_export(&err.to_string()))?;
        if record.len() != column_count {
            return Err(LedgerError::internal_export(&format!(
                "statement row has {} fields, expected {column_count}",
                record.len()
            )));
        }
        rows.push(ParsedRow {
            date: record[0].to_string(),
            deposit: parse_amount(&record[column_count - 3])?,
            withdrawal: parse_amount(&record[column_count - 2])?,
            balance: parse_amount(&record[column_count - 1])?,
        });
    }

    Ok(ParsedStatement { layout, rows })
}

fn parse_amount(field: &str) -> LedgerResult<i64> {
    field
        .parse::<i64>()
        .map_err(|_| LedgerError::internal_export(&format!("non-numeric amount field `{field}`")))
}
