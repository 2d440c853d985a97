pub mod batch;
mod common;
pub mod generate;
pub mod profiles;
