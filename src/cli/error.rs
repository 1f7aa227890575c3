//! CLI-level errors (wraps store and config errors)

use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::StoreError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Store(e) => match e {
                StoreError::NotFound(_) | StoreError::InvalidName(_) => crate::exitcode::USAGE,
                StoreError::Io { .. } | StoreError::ClearFailed { .. } => crate::exitcode::IOERR,
            },
        }
    }
}
