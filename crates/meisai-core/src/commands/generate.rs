use std::fs;
use std::path::Path;

use chrono::Local;

use crate::commands::common::{rows_for_ledger, summary_for_ledger};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::StatementData;
use crate::error::{LedgerError, LedgerResult};
use crate::export::csv::{StatementLayout, default_file_name, render_statement_csv};
use crate::ledger;
use crate::params::{GenerationParams, RawParams};

#[derive(Debug, Clone, Default)]
pub struct GenerateRunOptions<'a> {
    pub initial_balance: i64,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub years: Option<u32>,
    pub kind: &'a str,
    pub layout: &'a str,
    pub max_rows: Option<usize>,
    pub seed: Option<u64>,
    pub out: Option<&'a Path>,
}

/// Generates one statement; with an output path the CSV lands on disk,
/// otherwise the rows only travel in the envelope.
pub fn run(options: &GenerateRunOptions<'_>) -> LedgerResult<SuccessEnvelope> {
    let layout = StatementLayout::from_cli_value(options.layout)?;
    let params = GenerationParams::resolve(
        &RawParams {
            initial_balance: options.initial_balance,
            from: options.from,
            to: options.to,
            years: options.years,
            kind: options.kind,
            max_rows: options.max_rows,
            seed: options.seed,
        },
        "generate",
    )?;

    let ledger = ledger::generate(&params);
    let csv_bytes = render_statement_csv(&ledger.rows, layout)?;

    let (out_path, bytes_written) = match options.out {
        Some(path) => {
            fs::write(path, &csv_bytes)
                .map_err(|err| LedgerError::export_write_failed(path, &err.to_string()))?;
            (Some(path.display().to_string()), Some(csv_bytes.len() as i64))
        }
        None => (None, None),
    };

    let data = StatementData {
        account_kind: params.kind.as_str().to_string(),
        layout: layout.as_str().to_string(),
        seed: params.seed,
        truncated: ledger.truncated,
        summary: summary_for_ledger(&ledger),
        rows: rows_for_ledger(&ledger, layout),
        suggested_file_name: default_file_name(Local::now().date_naive()),
        out_path,
        bytes_written,
    };
    success("generate", data)
}
