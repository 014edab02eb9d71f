//! dl-cli library
//!
//! Command definitions and dispatch for the `deadeye` binary.

pub(crate) mod auth_commands;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod me_commands;
pub(crate) mod order_commands;
pub(crate) mod review_commands;
pub(crate) mod service_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{Commands, execute};
pub use error::{CliError, Result as CliResult};
