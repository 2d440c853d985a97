use std::io::{Cursor, Write};

use chrono::NaiveDate;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{LedgerError, LedgerResult};
use crate::export::csv::{StatementLayout, render_monthly_csv};
use crate::ledger::monthly::MonthlyStatement;
use crate::profile::AccountKind;

/// Default archive name, `bank_statements_YYYYMMDD.zip` of the generation day.
pub fn default_archive_name(today: NaiveDate) -> String {
    format!("bank_statements_{}.zip", today.format("%Y%m%d"))
}

/// Packs one CSV per monthly statement into an in-memory ZIP archive.
pub fn build_monthly_archive(
    statements: &[MonthlyStatement],
    kind: AccountKind,
    layout: StatementLayout,
) -> LedgerResult<Vec<u8>> {
    let buffer = Cursor::new(Vec::new());
    let mut archive = ZipWriter::new(buffer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for statement in statements {
        archive
            .start_file(statement.file_name(), options)
            .map_err(|err| LedgerError::internal_archive(&err.to_string()))?;
        let csv_bytes = render_monthly_csv(statement, kind, layout)?;
        archive
            .write_all(&csv_bytes)
            .map_err(|err| LedgerError::internal_archive(&err.to_string()))?;
    }

    let cursor = archive
        .finish()
        .map_err(|err| LedgerError::internal_archive(&err.to_string()))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::{build_monthly_archive, default_archive_name};
    use crate::export::csv::StatementLayout;
    use crate::ledger::monthly::split_by_month;
    use crate::ledger::generate;
    use crate::params::GenerationParams;
    use crate::profile::AccountKind;

    fn monthly_statements() -> Vec<crate::ledger::monthly::MonthlyStatement> {
        let ledger = generate(&GenerationParams {
            initial_balance: 1_000_000,
            from: "2026-01-01".parse().unwrap(),
            to: "2026-03-31".parse().unwrap(),
            kind: AccountKind::Personal,
            max_rows: None,
            seed: Some(17),
        });
        split_by_month(&ledger)
    }

    #[test]
    fn archive_has_zip_magic_and_one_entry_per_month() {
        let statements = monthly_statements();
        let bytes =
            build_monthly_archive(&statements, AccountKind::Personal, StatementLayout::Standard)
                .unwrap();
        assert_eq!(&bytes[0..2], b"PK");

        let reader = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(reader).unwrap();
        assert_eq!(archive.len(), statements.len());
        for statement in &statements {
            assert!(archive.by_name(&statement.file_name()).is_ok());
        }
    }

    #[test]
    fn archive_entries_parse_back_with_chained_balances() {
        use std::io::Read;

        let statements = monthly_statements();
        let bytes =
            build_monthly_archive(&statements, AccountKind::Personal, StatementLayout::Standard)
                .unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();

        for statement in &statements {
            let mut entry = archive.by_name(&statement.file_name()).unwrap();
            let mut contents = Vec::new();
            entry.read_to_end(&mut contents).unwrap();

            let text = String::from_utf8(contents[3..].to_vec()).unwrap();
            assert!(text.starts_with("銀行入出金明細書\n"));
            assert!(text.contains(&format!("繰越残高: {}", statement.opening_balance)));
            assert!(text.contains(&format!("期末残高: {}", statement.closing_balance)));

            let parsed = crate::export::csv::parse_statement(
                text.as_bytes(),
            )
            .unwrap();
            assert_eq!(parsed.row_count(), statement.rows.len());
            assert_eq!(parsed.closing_balance(), Some(statement.closing_balance));
        }
    }

    #[test]
    fn default_archive_name_uses_compact_date() {
        let today = chrono::NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        assert_eq!(default_archive_name(today), "bank_statements_20261201.zip");
    }
}
