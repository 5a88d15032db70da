//! CogSNet CLI: compute decaying-weight network snapshots from an event
//! file and write them as CSV or JSON.

pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::OutputFormat;
