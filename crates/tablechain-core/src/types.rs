//! Strong type definitions for Tablechain.
//!
//! Ordering is the load-bearing invariant here: both [`ColumnOrder`] and
//! [`Row`] are explicit sequences, never name-keyed maps, so encoding can
//! never pick up a platform-dependent iteration order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed column order for a table-processing run.
///
/// Captured once before any row is processed. Every row must carry exactly
/// one cell per column, in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnOrder(Vec<String>);

impl ColumnOrder {
    /// Create a column order from names, preserving their sequence.
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The column names, in order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Pair a row's cells with the column names.
    ///
    /// Returns `None` if the row's arity does not match.
    pub fn zip_cells(&self, row: &Row) -> Option<BTreeMap<String, String>> {
        if row.len() != self.len() {
            return None;
        }
        Some(
            self.0
                .iter()
                .cloned()
                .zip(row.cells().iter().cloned())
                .collect(),
        )
    }
}

impl From<Vec<&str>> for ColumnOrder {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(String::from).collect())
    }
}

/// One row: ordered text cells, one per column. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row(Vec<String>);

impl Row {
    /// Create a row from ordered cell values.
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cell values, in column order.
    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Self(cells.into_iter().map(String::from).collect())
    }
}

/// A row's content identifier: CIDv1, `raw` codec, sha2-256 multihash,
/// rendered base32-lower with the `b` multibase prefix.
///
/// Self-describing: a decoder recovers the hash function and digest
/// length from the identifier itself.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowCid(String);

impl RowCid {
    /// Wrap an already-rendered identifier string.
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the identifier text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for RowCid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowCid({})", self.0)
    }
}

impl fmt::Display for RowCid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RowCid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_cells_preserves_values() {
        let columns = ColumnOrder::from(vec!["a", "b"]);
        let row = Row::from(vec!["1", "x"]);

        let map = columns.zip_cells(&row).unwrap();
        assert_eq!(map.get("a").unwrap(), "1");
        assert_eq!(map.get("b").unwrap(), "x");
    }

    #[test]
    fn test_zip_cells_arity_mismatch() {
        let columns = ColumnOrder::from(vec!["a", "b"]);
        let row = Row::from(vec!["1"]);
        assert!(columns.zip_cells(&row).is_none());
    }

    #[test]
    fn test_row_cid_display() {
        let cid = RowCid::from_string("bafkreitest".to_string());
        assert_eq!(format!("{}", cid), "bafkreitest");
        assert_eq!(format!("{:?}", cid), "RowCid(bafkreitest)");
    }
}
