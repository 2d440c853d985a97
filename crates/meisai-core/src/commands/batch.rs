use std::fs;
use std::path::Path;

use chrono::Local;

use crate::commands::common::summary_for_ledger;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{BatchData, MonthSummary};
use crate::error::{LedgerError, LedgerResult};
use crate::export::archive::{build_monthly_archive, default_archive_name};
use crate::export::csv::StatementLayout;
use crate::ledger;
use crate::ledger::monthly::split_by_month;
use crate::params::{GenerationParams, RawParams};

#[derive(Debug, Clone)]
pub struct BatchRunOptions<'a> {
    pub initial_balance: i64,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub years: Option<u32>,
    pub kind: &'a str,
    pub layout: &'a str,
    pub seed: Option<u64>,
    pub out: &'a Path,
}

/// Generates the ledger, splits it by calendar month, and writes the ZIP of
/// per-month statements. Batch mode never truncates; batches are complete
/// months carrying the running balance across file boundaries.
pub fn run(options: &BatchRunOptions<'_>) -> LedgerResult<SuccessEnvelope> {
    let layout = StatementLayout::from_cli_value(options.layout)?;
    let params = GenerationParams::resolve(
        &RawParams {
            initial_balance: options.initial_balance,
            from: options.from,
            to: options.to,
            years: options.years,
            kind: options.kind,
            max_rows: None,
            seed: options.seed,
        },
        "batch",
    )?;

    let ledger = ledger::generate(&params);
    let statements = split_by_month(&ledger);
    let archive_bytes = build_monthly_archive(&statements, params.kind, layout)?;

    fs::write(options.out, &archive_bytes)
        .map_err(|err| LedgerError::export_write_failed(options.out, &err.to_string()))?;

    let months = statements
        .iter()
        .map(|statement| MonthSummary {
            month: statement.key(),
            file_name: statement.file_name(),
            opening_balance: statement.opening_balance,
            closing_balance: statement.closing_balance,
            row_count: statement.rows.len() as i64,
        })
        .collect();

    let data = BatchData {
        account_kind: params.kind.as_str().to_string(),
        layout: layout.as_str().to_string(),
        seed: params.seed,
        summary: summary_for_ledger(&ledger),
        months,
        suggested_file_name: default_archive_name(Local::now().date_naive()),
        out_path: options.out.display().to_string(),
        bytes_written: archive_bytes.len() as i64,
    };
    success("batch", data)
}
