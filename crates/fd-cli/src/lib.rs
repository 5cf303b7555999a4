//! fibro - FibroDetect command-line client
//!
//! Drives the session store, the role-gated router and the REST client
//! from the terminal. Every command prints JSON on stdout.

pub mod app;
pub mod cli;
pub mod commands;
pub mod diagnostic_commands;
pub mod error;
pub mod logger;
pub mod patient_commands;
pub mod stats_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
