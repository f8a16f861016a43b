//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tablechain_core::{ColumnOrder, Row};

/// Generate a cell value: printable text, possibly empty, including the
/// characters the canonical encoder escapes.
pub fn cell() -> impl Strategy<Value = String> {
    "[ -~]{0,16}".prop_map(String::from)
}

/// Generate `n` distinct-enough column names.
pub fn column_names(n: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9_]{0,11}", n..=n)
}

/// A generated table: column names plus rows of matching arity.
#[derive(Debug, Clone)]
pub struct TableCase {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableCase {
    /// The column order for this table.
    pub fn column_order(&self) -> ColumnOrder {
        ColumnOrder::new(self.columns.clone())
    }

    /// The rows as core rows.
    pub fn core_rows(&self) -> Vec<Row> {
        self.rows.iter().cloned().map(Row::new).collect()
    }
}

/// Generate a table with 1..=`max_columns` columns and up to `max_rows`
/// rows, every row aligned to the column count.
pub fn table(max_columns: usize, max_rows: usize) -> impl Strategy<Value = TableCase> {
    (1..=max_columns).prop_flat_map(move |width| {
        (
            column_names(width),
            prop::collection::vec(prop::collection::vec(cell(), width..=width), 0..=max_rows),
        )
            .prop_map(|(columns, rows)| TableCase { columns, rows })
    })
}
