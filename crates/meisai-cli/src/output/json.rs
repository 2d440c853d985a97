use std::io;

use meisai_core::{FailureEnvelope, LedgerError, SuccessEnvelope};
use serde::Serialize;

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    serialize_json_pretty(success)
}

pub fn render_error_json(error: &LedgerError) -> io::Result<String> {
    serialize_json_pretty(&FailureEnvelope::from(error))
}

fn serialize_json_pretty<T: Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use meisai_core::LedgerError;
    use serde_json::Value;

    use super::render_error_json;

    #[test]
    fn error_json_carries_the_failure_envelope_shape() {
        let error = LedgerError::invalid_date_range("2026-03-01", "2026-01-01");
        let rendered = render_error_json(&error).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "invalid_date_range");
        assert!(value["error"]["recovery_steps"].as_array().is_some());
    }
}
