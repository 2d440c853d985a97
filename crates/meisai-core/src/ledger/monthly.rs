use chrono::Datelike;

use crate::ledger::{Ledger, TransactionRow};

/// One calendar month of the ledger, opening at the prior month's close.
#[derive(Debug, Clone)]
pub struct MonthlyStatement {
    pub year: i32,
    pub month: u32,
    pub opening_balance: i64,
    pub closing_balance: i64,
    pub rows: Vec<TransactionRow>,
}

impl MonthlyStatement {
    /// `YYYY-MM` key used in archive entry names and summaries.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn file_name(&self) -> String {
        format!("bank_statement_{}.csv", self.key())
    }
}

/// Splits a ledger into per-month statements, carrying the running balance
/// forward so month N's closing balance is month N+1's opening balance.
/// Months without any rows are skipped; the carried balance is unchanged
/// across them.
pub fn split_by_month(ledger: &Ledger) -> Vec<MonthlyStatement> {
    let mut statements: Vec<MonthlyStatement> = Vec::new();
    let mut carried = ledger.opening_balance;

    for row in &ledger.rows {
        let key = (row.date.year(), row.date.month());
        let needs_new = statements
            .last()
            .is_none_or(|current| (current.year, current.month) != key);
        if needs_new {
            statements.push(MonthlyStatement {
                year: key.0,
                month: key.1,
                opening_balance: carried,
                closing_balance: carried,
                rows: Vec::new(),
            });
        }
        if let Some(current) = statements.last_mut() {
            current.rows.push(row.clone());
            current.closing_balance = row.balance;
        }
        carried = row.balance;
    }

    statements
}
