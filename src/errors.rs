//! Store-level errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no such alias: {0}")]
    NotFound(String),

    #[error("invalid alias name: {0:?}")]
    InvalidName(String),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to clear aliases: {}", failures.join("; "))]
    ClearFailed { failures: Vec<String> },
}

impl StoreError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
