use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

pub fn parse_account_kind(value: &str) -> Result<String, String> {
    match value {
        "personal" | "corporate" => Ok(value.to_string()),
        _ => Err("kind must be one of: personal, corporate".to_string()),
    }
}

pub fn parse_layout(value: &str) -> Result<String, String> {
    match value {
        "standard" | "detailed" | "english" => Ok(value.to_string()),
        _ => Err("layout must be one of: standard, detailed, english".to_string()),
    }
}

/// Extended help shown after `meisai generate --help`.
pub const GENERATE_AFTER_HELP: &str = "\
How generation works:
  Every run synthesizes a fresh fictitious ledger; nothing is stored.
  The loop walks the date range day by day:
    - salary lands on the 25th of every month
    - rent/fixed costs land on the last calendar day of every month
    - roughly 60% of days also carry 1-3 small random transactions
  The running balance carries across every row from `--balance`.

Date range:
  Pass `--from`/`--to` together for an exact range, or `--years N` for
  N years ending today. Neither means one year ending today.
  `--from` after `--to` is refused and nothing is generated.

Reproducibility:
  Pass `--seed N` to get the same statement on every run.
  Without it, every run draws fresh random rows.

Output:
  Without `--out`, text mode prints the summary and the statement table
  (latest rows first). With `--out PATH`, the CSV is written there:
  comma-delimited, UTF-8 with BOM so spreadsheet apps render the
  Japanese headers. `--json` prints the full envelope either way.

Layouts:
  standard   取引日, 摘要, お預入れ額, お引き出し額, 差し引き残高
  detailed   standard plus 取引種別 and 通貨 columns
  english    Date, Description, Deposit, Withdrawal, Balance
";

#[derive(Debug, Parser)]
#[command(
    name = "meisai",
    version,
    about = "fictitious bank statement generator",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate one fictitious statement as a table or CSV file
    #[command(after_help = GENERATE_AFTER_HELP)]
    Generate {
        /// Opening balance in yen
        #[arg(long, default_value_t = 1_000_000, allow_negative_numbers = true)]
        balance: i64,
        /// Start date (YYYY-MM-DD); pass together with --to
        #[arg(long, value_parser = parse_iso_date, requires = "to", conflicts_with = "years")]
        from: Option<IsoDate>,
        /// End date (YYYY-MM-DD); pass together with --from
        #[arg(long, value_parser = parse_iso_date, requires = "from", conflicts_with = "years")]
        to: Option<IsoDate>,
        /// Span in years ending today (default 1)
        #[arg(long)]
        years: Option<u32>,
        /// Account profile: personal or corporate
        #[arg(long, default_value = "personal", value_parser = parse_account_kind)]
        kind: String,
        /// Column layout: standard, detailed, or english
        #[arg(long, default_value = "standard", value_parser = parse_layout)]
        layout: String,
        /// Keep only the latest N rows
        #[arg(long)]
        max_rows: Option<usize>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Write the statement CSV to this path
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the result envelope as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a ZIP archive with one statement CSV per calendar month
    Batch {
        /// Opening balance in yen
        #[arg(long, default_value_t = 1_000_000, allow_negative_numbers = true)]
        balance: i64,
        /// Start date (YYYY-MM-DD); pass together with --to
        #[arg(long, value_parser = parse_iso_date, requires = "to", conflicts_with = "years")]
        from: Option<IsoDate>,
        /// End date (YYYY-MM-DD); pass together with --from
        #[arg(long, value_parser = parse_iso_date, requires = "from", conflicts_with = "years")]
        to: Option<IsoDate>,
        /// Span in years ending today (default 1)
        #[arg(long)]
        years: Option<u32>,
        /// Account profile: personal or corporate
        #[arg(long, default_value = "personal", value_parser = parse_account_kind)]
        kind: String,
        /// Column layout: standard, detailed, or english
        #[arg(long, default_value = "standard", value_parser = parse_layout)]
        layout: String,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Write the ZIP archive to this path
        #[arg(long)]
        out: PathBuf,
        /// Print the result envelope as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the account profiles and their calendar rules
    Profiles {
        /// Print the result envelope as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::{parse_account_kind, parse_from, parse_iso_date, parse_layout};

    #[test]
    fn generate_accepts_full_flag_set() {
        let parsed = parse_from([
            "meisai",
            "generate",
            "--balance",
            "2000000",
            "--from",
            "2026-01-01",
            "--to",
            "2026-06-30",
            "--kind",
            "corporate",
            "--layout",
            "detailed",
            "--max-rows",
            "500",
            "--seed",
            "7",
            "--json",
        ]);
        assert!(parsed.is_ok());
    }

    #[test]
    fn from_without_to_is_a_parse_error() {
        let parsed = parse_from(["meisai", "generate", "--from", "2026-01-01"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn years_conflicts_with_explicit_range() {
        let parsed = parse_from([
            "meisai",
            "generate",
            "--years",
            "2",
            "--from",
            "2026-01-01",
            "--to",
            "2026-06-30",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn batch_requires_an_output_path() {
        assert!(parse_from(["meisai", "batch"]).is_err());
        assert!(parse_from(["meisai", "batch", "--out", "statements.zip"]).is_ok());
    }

    #[test]
    fn date_parser_enforces_strict_iso_shape() {
        assert!(parse_iso_date("2026-01-01").is_ok());
        assert!(parse_iso_date("2026/01/01").is_err());
        assert!(parse_iso_date("2026-13-01").is_err());
    }

    #[test]
    fn kind_and_layout_parsers_reject_unknown_values() {
        assert!(parse_account_kind("personal").is_ok());
        assert!(parse_account_kind("business").is_err());
        assert!(parse_layout("english").is_ok());
        assert!(parse_layout("wide").is_err());
    }
}
