//! pms-cli library
//!
//! Exports the HTTP client, the diagnostics runner and the offline password
//! migration for use by the `pms` binary and its tests.

pub mod cli;
pub mod client;
pub mod commands;
pub mod diagnose;
pub mod error;
pub mod migrate_passwords;

#[cfg(test)]
mod tests;

pub use cli::{Cli, DEFAULT_SERVER_URL};
pub use client::{CliClientResult, Client, ClientError};
pub use commands::{Commands, ListCommands, ProjectCommands, ScopedListCommands};
pub use diagnose::{DiagnosticReport, DiagnosticStep, run_diagnostics};
pub use error::{CliError, Result as CliResult};
pub use migrate_passwords::migrate_passwords;
