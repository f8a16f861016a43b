//! Error types for Tablechain Core.

use thiserror::Error;

/// Errors from canonical row encoding.
///
/// Encoding failures are fatal for the whole run: a row that cannot be
/// canonically serialized would leave a silent gap in the chain.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("row has {cells} cells but column order has {columns} columns")]
    ColumnCountMismatch { cells: usize, columns: usize },

    #[error("cells cannot be canonically serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from identifier-envelope construction.
///
/// These cannot occur for the fixed sha2-256 parameters the chain uses;
/// they exist so the envelope layer never panics on a bad function code.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("unsupported multihash function code {0:#04x}")]
    UnsupportedHashFunction(u8),

    #[error("digest is {got} bytes but multihash declares {expected}")]
    DigestLengthMismatch { got: usize, expected: usize },
}

/// Error from the sequential fold, carrying the offending row index.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("row {row}: {source}")]
    Encoding {
        row: usize,
        #[source]
        source: EncodingError,
    },

    #[error("row {row}: {source}")]
    Chain {
        row: usize,
        #[source]
        source: ChainError,
    },
}

impl HashError {
    /// The 0-based index of the row that failed.
    pub fn row(&self) -> usize {
        match self {
            HashError::Encoding { row, .. } | HashError::Chain { row, .. } => *row,
        }
    }
}
