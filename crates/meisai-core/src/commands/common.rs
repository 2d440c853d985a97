use crate::contracts::types::{StatementRowData, StatementSummary};
use crate::export::csv::StatementLayout;
use crate::ledger::Ledger;

pub(crate) fn summary_for_ledger(ledger: &Ledger) -> StatementSummary {
    StatementSummary {
        from: ledger.from.format("%Y-%m-%d").to_string(),
        to: ledger.to.format("%Y-%m-%d").to_string(),
        opening_balance: ledger.opening_balance,
        closing_balance: ledger.closing_balance(),
        total_deposits: ledger.total_deposits(),
        total_withdrawals: ledger.total_withdrawals(),
        row_count: ledger.rows.len() as i64,
    }
}

pub(crate) fn rows_for_ledger(ledger: &Ledger, layout: StatementLayout) -> Vec<StatementRowData> {
    ledger
        .rows
        .iter()
        .map(|row| StatementRowData {
            date: layout.format_date(row.date),
            description: row.description.clone(),
            deposit: row.deposit,
            withdrawal: row.withdrawal,
            balance: row.balance,
        })
        .collect()
}
