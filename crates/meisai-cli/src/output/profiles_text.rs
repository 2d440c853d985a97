use std::io;

use serde_json::Value;

use super::format::{format_yen, key_value_rows};

pub fn render_profiles(data: &Value) -> io::Result<String> {
    let profiles = data["profiles"]
        .as_array()
        .ok_or_else(|| io::Error::other("profiles data is missing `profiles`"))?;

    let mut lines = vec!["Account profiles".to_string()];
    for profile in profiles {
        lines.push(String::new());
        lines.push(format!(
            "{} ({})",
            profile["kind"].as_str().unwrap_or("?"),
            profile["label"].as_str().unwrap_or("?"),
        ));

        let entries = vec![
            ("Payday (25th)", fixed_event_line(&profile["payday"])),
            ("Month-end", fixed_event_line(&profile["month_end"])),
            ("Deposit pool", pool_line(&profile["deposit_descriptions"])),
            (
                "Withdrawal pool",
                pool_line(&profile["withdrawal_descriptions"]),
            ),
            (
                "Incidental deposit",
                range_line(&profile["incidental_deposit_range"]),
            ),
            (
                "Incidental withdrawal",
                range_line(&profile["incidental_withdrawal_range"]),
            ),
        ];
        lines.extend(key_value_rows(&entries, 2));
    }

    Ok(lines.join("\n"))
}

fn fixed_event_line(event: &Value) -> String {
    format!(
        "{} ({}, {} - {})",
        event["description"].as_str().unwrap_or("?"),
        event["direction"].as_str().unwrap_or("?"),
        format_yen(event["amount_min"].as_i64().unwrap_or(0)),
        format_yen(event["amount_max"].as_i64().unwrap_or(0)),
    )
}

fn pool_line(pool: &Value) -> String {
    pool.as_array()
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<&str>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn range_line(range: &Value) -> String {
    let min = range[0].as_i64().unwrap_or(0);
    let max = range[1].as_i64().unwrap_or(0);
    format!("{} - {}", format_yen(min), format_yen(max))
}
