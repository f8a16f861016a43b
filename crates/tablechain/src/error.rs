//! Error types for the unified API.

use tablechain_core::HashError;
use tablechain_source::SourceError;
use thiserror::Error;

/// Errors that can occur while hashing a table.
///
/// Hashing failures are fatal for the run: continuing past a bad row
/// would produce a chain with a silent gap.
#[derive(Debug, Error)]
pub enum TabulateError {
    /// The source failed to deliver columns or rows.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// A row could not be encoded or chained; carries the row index.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Result type for table hashing.
pub type Result<T> = std::result::Result<T, TabulateError>;
