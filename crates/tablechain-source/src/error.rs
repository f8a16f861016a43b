//! Error types for table sources.

use thiserror::Error;

/// Errors that can occur while scanning a table.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Database error from MySQL.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The source reported a column set the scan could not honor.
    #[error("invalid column metadata: {0}")]
    InvalidColumns(String),
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
