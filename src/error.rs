//! Error types for kip.

use thiserror::Error;

/// Errors that can occur in kip.
#[derive(Debug, Error)]
pub enum KipError {
    /// The underlying database is inaccessible or a query failed.
    ///
    /// Persistence failures propagate to the caller as hard failures;
    /// in-memory tracker state is never mutated on this path.
    #[error("database error: {0}")]
    Database(String),

    /// Configuration could not be read, parsed, or written.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input or serialized data could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// A requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A sleep session is already being tracked.
    #[error("{0}")]
    AlreadyTracking(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for KipError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
