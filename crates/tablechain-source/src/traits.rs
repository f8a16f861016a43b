//! TableSource trait: the abstract interface for ordered table scans.
//!
//! This trait keeps the hashing pipeline storage-agnostic. Implementations
//! include MySQL (primary) and in-memory (for tests).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tablechain_core::Row;

use crate::error::Result;

/// A column's name and its database-reported type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,
    /// Type as the database describes it, e.g. `varchar(64)`.
    pub ty: String,
}

impl ColumnInfo {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// The TableSource trait: async interface for ordered table scans.
///
/// # Contract
///
/// - `columns` returns the table's columns in a fixed order, stable for
///   the lifetime of the source. This order is the canonical column
///   order for hashing.
/// - `fetch_rows` returns every row with exactly one text cell per
///   column, aligned with the `columns` order, in table scan order.
/// - Cells are text; a source converts database values (integers, dates,
///   NULLs) to strings before they reach the core.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// The table's name, for reporting.
    fn table_name(&self) -> &str;

    /// The table's columns, in canonical order.
    async fn columns(&self) -> Result<Vec<ColumnInfo>>;

    /// Every row, in table scan order, aligned with `columns`.
    async fn fetch_rows(&self) -> Result<Vec<Row>>;
}
