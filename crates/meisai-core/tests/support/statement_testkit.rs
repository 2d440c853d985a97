use std::path::Path;

use meisai_core::commands::generate::GenerateRunOptions;
use meisai_core::ledger::{Ledger, generate};
use meisai_core::params::GenerationParams;
use meisai_core::profile::AccountKind;

pub fn seeded_ledger(from: &str, to: &str, seed: u64) -> Ledger {
    generate(&GenerationParams {
        initial_balance: 1_000_000,
        from: from.parse().expect("valid from date"),
        to: to.parse().expect("valid to date"),
        kind: AccountKind::Personal,
        max_rows: None,
        seed: Some(seed),
    })
}

pub fn generate_options<'a>(
    from: &'a str,
    to: &'a str,
    seed: u64,
    out: Option<&'a Path>,
) -> GenerateRunOptions<'a> {
    GenerateRunOptions {
        initial_balance: 1_000_000,
        from: Some(from),
        to: Some(to),
        years: None,
        kind: "personal",
        layout: "standard",
        max_rows: None,
        seed: Some(seed),
        out,
    }
}
