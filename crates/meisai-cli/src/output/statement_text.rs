use std::io;

use serde_json::Value;

use super::format::{Align, Column, format_yen, key_value_rows, render_table};

/// Newest rows shown in the terminal preview; the full statement travels
/// through `--out` or `--json`.
const PREVIEW_ROWS: usize = 20;

pub fn render_generate(data: &Value) -> io::Result<String> {
    let summary = &data["summary"];
    let mut lines = vec![format!(
        "Fictitious statement generated ({} / {} layout)",
        str_field(data, "account_kind")?,
        str_field(data, "layout")?,
    )];
    lines.push(String::new());

    let mut entries = vec![
        (
            "Period",
            format!(
                "{} - {}",
                str_field(summary, "from")?,
                str_field(summary, "to")?
            ),
        ),
        ("Opening balance", format_yen(i64_field(summary, "opening_balance")?)),
        ("Closing balance", format_yen(i64_field(summary, "closing_balance")?)),
        ("Total deposits", format_yen(i64_field(summary, "total_deposits")?)),
        (
            "Total withdrawals",
            format_yen(i64_field(summary, "total_withdrawals")?),
        ),
        ("Rows", i64_field(summary, "row_count")?.to_string()),
    ];
    if let Some(seed) = data["seed"].as_u64() {
        entries.push(("Seed", seed.to_string()));
    }
    lines.extend(key_value_rows(&entries, 2));

    if data["truncated"].as_bool() == Some(true) {
        lines.push(String::new());
        lines.push("Note: only the latest rows were kept (--max-rows).".to_string());
    }

    match data["out_path"].as_str() {
        Some(path) => {
            lines.push(String::new());
            lines.push(format!(
                "Saved: {path} ({} bytes)",
                data["bytes_written"].as_i64().unwrap_or(0)
            ));
        }
        None => {
            lines.push(String::new());
            lines.push("Statement preview (latest first):".to_string());
            lines.push(String::new());
            lines.extend(preview_table(data)?);
        }
    }

    Ok(lines.join("\n"))
}

fn preview_table(data: &Value) -> io::Result<Vec<String>> {
    let rows_value = data["rows"]
        .as_array()
        .ok_or_else(|| io::Error::other("generate data is missing `rows`"))?;

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Description",
            align: Align::Left,
        },
        Column {
            name: "Deposit",
            align: Align::Right,
        },
        Column {
            name: "Withdrawal",
            align: Align::Right,
        },
        Column {
            name: "Balance",
            align: Align::Right,
        },
    ];

    // Latest first, like the source page's preview ordering.
    let mut table_rows = Vec::new();
    for row in rows_value.iter().rev().take(PREVIEW_ROWS) {
        table_rows.push(vec![
            str_field(row, "date")?.to_string(),
            str_field(row, "description")?.to_string(),
            format_yen(i64_field(row, "deposit")?),
            format_yen(i64_field(row, "withdrawal")?),
            format_yen(i64_field(row, "balance")?),
        ]);
    }

    let mut lines = render_table(&columns, &table_rows);
    if rows_value.len() > PREVIEW_ROWS {
        lines.push(String::new());
        lines.push(format!(
            "  … {} earlier rows not shown. Use --out or --json for the full statement.",
            rows_value.len() - PREVIEW_ROWS
        ));
    }
    Ok(lines)
}

pub fn render_batch(data: &Value) -> io::Result<String> {
    let summary = &data["summary"];
    let mut lines = vec!["Monthly statement archive written".to_string(), String::new()];

    let mut entries = vec![
        (
            "Archive",
            format!(
                "{} ({} bytes)",
                str_field(data, "out_path")?,
                i64_field(data, "bytes_written")?
            ),
        ),
        (
            "Period",
            format!(
                "{} - {}",
                str_field(summary, "from")?,
                str_field(summary, "to")?
            ),
        ),
        ("Account", str_field(data, "account_kind")?.to_string()),
        ("Layout", str_field(data, "layout")?.to_string()),
        ("Closing balance", format_yen(i64_field(summary, "closing_balance")?)),
    ];
    if let Some(seed) = data["seed"].as_u64() {
        entries.push(("Seed", seed.to_string()));
    }
    lines.extend(key_value_rows(&entries, 2));
    lines.push(String::new());

    let months = data["months"]
        .as_array()
        .ok_or_else(|| io::Error::other("batch data is missing `months`"))?;
    let columns = [
        Column {
            name: "Month",
            align: Align::Left,
        },
        Column {
            name: "File",
            align: Align::Left,
        },
        Column {
            name: "Opening",
            align: Align::Right,
        },
        Column {
            name: "Closing",
            align: Align::Right,
        },
        Column {
            name: "Rows",
            align: Align::Right,
        },
    ];
    let mut table_rows = Vec::new();
    for month in months {
        table_rows.push(vec![
            str_field(month, "month")?.to_string(),
            str_field(month, "file_name")?.to_string(),
            format_yen(i64_field(month, "opening_balance")?),
            format_yen(i64_field(month, "closing_balance")?),
            i64_field(month, "row_count")?.to_string(),
        ]);
    }
    lines.extend(render_table(&columns, &table_rows));

    Ok(lines.join("\n"))
}

fn str_field<'a>(value: &'a Value, field: &str) -> io::Result<&'a str> {
    value[field]
        .as_str()
        .ok_or_else(|| io::Error::other(format!("missing string field `{field}`")))
}

fn i64_field(value: &Value, field: &str) -> io::Result<i64> {
    value[field]
        .as_i64()
        .ok_or_else(|| io::Error::other(format!("missing numeric field `{field}`")))
}
