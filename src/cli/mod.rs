//! CLI layer: argument parsing, command dispatch, output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use error::{CliError, CliResult};
