mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use meisai_core::LedgerError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Meisai - fictitious bank statement generator

Usage:
  meisai <command>

Start here:
  meisai generate --seed 1
  meisai generate --help
  meisai profiles
";

const TOP_LEVEL_HELP: &str = "Meisai — fictitious bank statement generator

USAGE: meisai <command>

Try it:
  meisai generate                                         Print a one-year statement preview
  meisai generate --kind corporate --years 2              Two corporate years
  meisai profiles                                         Show account profiles and calendar rules

Export:
  meisai generate --out statement.csv                     Single CSV (UTF-8 with BOM)
  meisai batch --out statements.zip                       ZIP with one CSV per calendar month

Reproducible data:
  meisai generate --seed 42                               Same statement on every run

Every run is synthetic and self-contained: nothing is stored, and the
same parameters with a different seed give a different ledger.
Run `meisai <command> --help` for command usage.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if is_top_level_help_request(&raw_args) {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            let command_hint = command_path_from_args(&raw_args);
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                LedgerError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the recovery steps are the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();

    let hint = match non_flags.as_slice() {
        ["generate", ..] => Some("generate"),
        ["batch", ..] => Some("batch"),
        ["profiles", ..] => Some("profiles"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn exit_code_for_error(error: &LedgerError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::{command_path_from_args, strip_clap_boilerplate};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn command_hint_skips_flag_arguments() {
        let hint = command_path_from_args(&args(&["meisai", "generate", "--from", "bad"]));
        assert_eq!(hint.as_deref(), Some("generate"));
    }

    #[test]
    fn unknown_commands_get_no_hint() {
        assert!(command_path_from_args(&args(&["meisai", "export"])).is_none());
    }

    #[test]
    fn boilerplate_stripping_cuts_at_the_usage_block() {
        let message = "error: invalid value\n\nUsage: meisai generate [OPTIONS]\n";
        assert_eq!(strip_clap_boilerplate(message), "error: invalid value");
    }
}
