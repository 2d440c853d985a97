use chrono::{Duration, Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::profile::AccountKind;

/// Default span when neither `--years` nor an explicit range is given,
/// matching the source tool's one-year slider default.
pub const DEFAULT_SPAN_YEARS: u32 = 1;

#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub initial_balance: i64,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub kind: AccountKind,
    pub max_rows: Option<usize>,
    pub seed: Option<u64>,
}

/// Raw, CLI-shaped inputs before range resolution.
#[derive(Debug, Clone, Default)]
pub struct RawParams<'a> {
    pub initial_balance: i64,
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub years: Option<u32>,
    pub kind: &'a str,
    pub max_rows: Option<usize>,
    pub seed: Option<u64>,
}

impl GenerationParams {
    /// Validates raw inputs and resolves the date range.
    ///
    /// An explicit `from`/`to` pair wins; `years` counts back from today;
    /// neither means [`DEFAULT_SPAN_YEARS`]. An inverted range is the one
    /// user-facing generation error and refuses to produce any ledger.
    pub fn resolve(raw: &RawParams<'_>, command: &str) -> LedgerResult<Self> {
        let kind = AccountKind::from_cli_value(raw.kind)?;

        if raw.years.is_some() && (raw.from.is_some() || raw.to.is_some()) {
            return Err(LedgerError::invalid_argument_with_recovery(
                "Pass either `--years` or an explicit `--from`/`--to` range, not both.",
                vec![
                    "Drop `--years` to keep the explicit range.".to_string(),
                    "Drop `--from`/`--to` to span whole years ending today.".to_string(),
                    format!("Run `meisai {command} --help` for date options."),
                ],
            ));
        }

        let (from, to) = match (raw.from, raw.to) {
            (Some(from_value), Some(to_value)) => (
                parse_iso_date_strict(from_value, "from", command)?,
                parse_iso_date_strict(to_value, "to", command)?,
            ),
            (None, None) => {
                let years = raw.years.unwrap_or(DEFAULT_SPAN_YEARS);
                if years == 0 {
                    return Err(LedgerError::invalid_argument_for_command(
                        "`--years` must be at least 1.",
                        Some(command),
                    ));
                }
                span_ending_today(years)
            }
            _ => {
                return Err(LedgerError::invalid_argument_for_command(
                    "`--from` and `--to` must be passed together.",
                    Some(command),
                ));
            }
        };

        if from > to {
            return Err(LedgerError::invalid_date_range(
                &from.format("%Y-%m-%d").to_string(),
                &to.format("%Y-%m-%d").to_string(),
            ));
        }

        if raw.max_rows == Some(0) {
            return Err(LedgerError::invalid_argument_for_command(
                "`--max-rows` must be at least 1.",
                Some(command),
            ));
        }

        Ok(Self {
            initial_balance: raw.initial_balance,
            from,
            to,
            kind,
            max_rows: raw.max_rows,
            seed: raw.seed,
        })
    }
}

/// 365 days per year backwards from today, as the source tool counts spans.
fn span_ending_today(years: u32) -> (NaiveDate, NaiveDate) {
    let today = Local::now().date_naive();
    (today - Duration::days(365 * i64::from(years)), today)
}

pub fn parse_iso_date_strict(value: &str, field: &str, command: &str) -> LedgerResult<NaiveDate> {
    let shape_ok = value.len() == 10 && {
        let bytes = value.as_bytes();
        bytes[4] == b'-'
            && bytes[7] == b'-'
            && [0usize, 1, 2, 3, 5, 6, 8, 9]
                .iter()
                .all(|&index| bytes[index].is_ascii_digit())
    };
    if !shape_ok {
        return Err(LedgerError::invalid_argument_for_command(
            &format!("`--{field}` must use YYYY-MM-DD format."),
            Some(command),
        ));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        LedgerError::invalid_argument_for_command(
            &format!("`--{field}` must use valid calendar values."),
            Some(command),
        )
    })
}
