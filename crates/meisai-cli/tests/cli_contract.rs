use std::process::Command;

use serde_json::Value;

fn run_cli(args: &[&str]) -> (bool, i32, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_meisai"))
        .args(args)
        .output()
        .expect("binary runs");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    (
        output.status.success(),
        output.status.code().unwrap_or(-1),
        stdout,
    )
}

#[test]
fn no_args_prints_root_help_and_succeeds() {
    let (success, _, stdout) = run_cli(&[]);
    assert!(success);
    assert!(stdout.starts_with("Meisai - fictitious bank statement generator"));
    assert!(stdout.contains("meisai generate --help"));
}

#[test]
fn top_level_help_is_the_task_oriented_page() {
    let (success, _, stdout) = run_cli(&["--help"]);
    assert!(success);
    assert!(stdout.starts_with("Meisai — fictitious bank statement generator"));
    assert!(stdout.contains("meisai batch --out statements.zip"));
}

#[test]
fn seeded_generate_json_is_reproducible_and_internally_consistent() {
    let args = [
        "generate",
        "--from",
        "2026-01-01",
        "--to",
        "2026-03-31",
        "--seed",
        "42",
        "--json",
    ];
    let (success, _, first) = run_cli(&args);
    assert!(success);
    let (_, _, second) = run_cli(&args);
    assert_eq!(first, second);

    let envelope: Value = serde_json::from_str(&first).expect("valid JSON envelope");
    assert_eq!(envelope["ok"], true);
    assert_eq!(envelope["command"], "generate");
    let data = &envelope["data"];
    let rows = data["rows"].as_array().expect("rows array");
    assert_eq!(
        data["summary"]["row_count"].as_i64().unwrap(),
        rows.len() as i64
    );

    let mut expected = data["summary"]["opening_balance"].as_i64().unwrap();
    for row in rows {
        let deposit = row["deposit"].as_i64().unwrap();
        let withdrawal = row["withdrawal"].as_i64().unwrap();
        assert!((deposit > 0) != (withdrawal > 0));
        expected += deposit - withdrawal;
        assert_eq!(row["balance"].as_i64().unwrap(), expected);
    }
    assert_eq!(
        data["summary"]["closing_balance"].as_i64().unwrap(),
        expected
    );
}

#[test]
fn inverted_range_fails_with_the_range_error_in_both_modes() {
    let (success, code, stdout) = run_cli(&[
        "generate",
        "--from",
        "2026-06-30",
        "--to",
        "2026-01-01",
    ]);
    assert!(!success);
    assert_eq!(code, 1);
    assert!(stdout.contains("Error:    invalid_date_range"));
    assert!(stdout.contains("How to fix it:"));

    let (success, code, stdout) = run_cli(&[
        "generate",
        "--from",
        "2026-06-30",
        "--to",
        "2026-01-01",
        "--json",
    ]);
    assert!(!success);
    assert_eq!(code, 1);
    let envelope: Value = serde_json::from_str(&stdout).expect("valid JSON failure");
    assert_eq!(envelope["ok"], false);
    assert_eq!(envelope["error"]["code"], "invalid_date_range");
}

#[test]
fn generate_out_writes_a_bom_prefixed_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("statement.csv");
    let (success, _, stdout) = run_cli(&[
        "generate",
        "--from",
        "2026-01-01",
        "--to",
        "2026-01-31",
        "--seed",
        "3",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(success);
    assert!(stdout.contains("Saved:"));

    let bytes = std::fs::read(&out).expect("file written");
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(text.starts_with("取引日,摘要,お預入れ額,お引き出し額,差し引き残高\n"));
}

#[test]
fn batch_out_writes_a_zip_and_reports_months() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("statements.zip");
    let (success, _, stdout) = run_cli(&[
        "batch",
        "--from",
        "2026-01-01",
        "--to",
        "2026-02-28",
        "--seed",
        "3",
        "--out",
        out.to_str().unwrap(),
        "--json",
    ]);
    assert!(success);

    let envelope: Value = serde_json::from_str(&stdout).expect("valid JSON envelope");
    let months = envelope["data"]["months"].as_array().expect("months");
    assert_eq!(months.len(), 2);
    assert_eq!(months[0]["month"], "2026-01");
    assert_eq!(
        months[0]["closing_balance"],
        months[1]["opening_balance"]
    );

    let bytes = std::fs::read(&out).expect("archive written");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn unknown_arguments_render_the_error_contract() {
    let (success, code, stdout) = run_cli(&["generate", "--format", "tsv"]);
    assert!(!success);
    assert_eq!(code, 1);
    assert!(stdout.contains("Error:    invalid_argument"));
    assert!(stdout.contains("meisai generate --help"));
}

#[test]
fn profiles_lists_both_account_kinds() {
    let (success, _, stdout) = run_cli(&["profiles"]);
    assert!(success);
    assert!(stdout.contains("personal (個人口座)"));
    assert!(stdout.contains("corporate (法人口座)"));
}
