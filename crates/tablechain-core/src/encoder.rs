//! Canonical row encoding for deterministic hashing.
//!
//! A row's canonical bytes are the UTF-8 text of a JSON array holding the
//! cell values in column order. The encoding is a function of the values
//! and their positions only: the same cells in the same column order
//! produce identical bytes on every platform, which is what makes chains
//! verifiable across implementations.

use crate::error::EncodingError;
use crate::types::{ColumnOrder, Row};

/// Encoder bound to a fixed column order.
///
/// The column order is captured once per run and threaded here explicitly.
/// Name-keyed row maps are never iterated for encoding; their iteration
/// order is not part of the canonical form.
#[derive(Debug, Clone)]
pub struct RowEncoder {
    columns: ColumnOrder,
}

impl RowEncoder {
    /// Create an encoder for the given column order.
    pub fn new(columns: ColumnOrder) -> Self {
        Self { columns }
    }

    /// The column order this encoder is bound to.
    pub fn columns(&self) -> &ColumnOrder {
        &self.columns
    }

    /// Produce the canonical bytes for a row.
    ///
    /// Fails if the row's cell count does not match the column order; a
    /// misaligned row is a fatal precondition violation, never skipped.
    pub fn encode(&self, row: &Row) -> Result<Vec<u8>, EncodingError> {
        if row.len() != self.columns.len() {
            return Err(EncodingError::ColumnCountMismatch {
                cells: row.len(),
                columns: self.columns.len(),
            });
        }

        let json = serde_json::to_string(row.cells())?;
        Ok(escape_json_compat(&json).into_bytes())
    }
}

/// Escape `<`, `>`, `&`, U+2028 and U+2029 inside serialized JSON.
///
/// Encoders that apply HTML-safe escaping by default emit these as \u
/// sequences; canonical bytes must match them byte for byte or chains
/// minted elsewhere stop verifying. Safe to apply to the whole document:
/// none of these characters can appear inside an escape sequence.
fn escape_json_compat(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}
