pub mod commands;
pub mod contracts;
pub mod error;
pub mod export;
pub mod ledger;
pub mod params;
pub mod profile;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{LedgerError, LedgerResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
