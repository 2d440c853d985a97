use meisai_core::commands;
use meisai_core::commands::batch::BatchRunOptions;
use meisai_core::commands::generate::GenerateRunOptions;
use meisai_core::{LedgerResult, SuccessEnvelope};

use crate::cli::{Cli, Commands, IsoDate};

pub fn dispatch(cli: &Cli) -> LedgerResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Generate {
            balance,
            from,
            to,
            years,
            kind,
            layout,
            max_rows,
            seed,
            out,
            json: _,
        } => commands::generate::run(&GenerateRunOptions {
            initial_balance: *balance,
            from: iso_str(from),
            to: iso_str(to),
            years: *years,
            kind,
            layout,
            max_rows: *max_rows,
            seed: *seed,
            out: out.as_deref(),
        }),
        Commands::Batch {
            balance,
            from,
            to,
            years,
            kind,
            layout,
            seed,
            out,
            json: _,
        } => commands::batch::run(&BatchRunOptions {
            initial_balance: *balance,
            from: iso_str(from),
            to: iso_str(to),
            years: *years,
            kind,
            layout,
            seed: *seed,
            out,
        }),
        Commands::Profiles { json: _ } => commands::profiles::run(),
    }
}

fn iso_str(value: &Option<IsoDate>) -> Option<&str> {
    value.as_ref().map(IsoDate::as_str)
}
