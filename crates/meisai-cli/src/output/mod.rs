mod error_text;
mod format;
mod json;
mod mode;
mod profiles_text;
mod statement_text;

use std::io;

use meisai_core::{LedgerError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    println!("{body}");
    Ok(())
}

pub fn print_failure(error: &LedgerError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    println!("{body}");
    Ok(())
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "generate" => statement_text::render_generate(&success.data),
        "batch" => statement_text::render_batch(&success.data),
        "profiles" => profiles_text::render_profiles(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
