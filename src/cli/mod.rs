//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, Operation};
pub use commands::{execute_command, CommandOutcome};
pub use error::{CliError, CliResult};
