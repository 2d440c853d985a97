use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const GENERATE_HELP_COMMAND: &str = "meisai generate --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LedgerError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl LedgerError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `meisai {cmd} --help` for usage."),
            None => "Run `meisai --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn invalid_date_range(from: &str, to: &str) -> Self {
        Self::new(
            "invalid_date_range",
            &format!("Start date `{from}` is after end date `{to}`. No statement was generated."),
            vec![
                "Pass `--from` on or before `--to`.".to_string(),
                format!("Run `{GENERATE_HELP_COMMAND}` for date options."),
            ],
        )
        .with_data(json!({
            "from": from,
            "to": to,
        }))
    }

    pub fn export_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "export_write_failed",
            &format!("Cannot write statement output to `{location}`: {detail}"),
            vec![
                format!("Check that the parent directory of `{location}` exists."),
                "Pick a writable output path with `--out`.".to_string(),
            ],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn internal_archive(message: &str) -> Self {
        Self::new("internal_archive_error", message, Vec::new())
    }

    pub fn internal_export(message: &str) -> Self {
        Self::new("internal_export_error", message, Vec::new())
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
