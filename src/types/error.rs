//! Error types for the attribute index.

use thiserror::Error;

/// All errors that can occur in the attribute index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// A record with this ID has already been added.
    #[error("Record ID {0:?} already exists")]
    DuplicateRecord(String),

    /// A record carries no attributes and could never be matched.
    #[error("Record ID {0:?} has no attributes")]
    EmptyRecord(String),

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Convenience result type for attribute index operations.
pub type IndexResult<T> = Result<T, IndexError>;
