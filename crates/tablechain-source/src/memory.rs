//! In-memory implementation of the TableSource trait.
//!
//! Primarily for testing. Same contract as the MySQL source but backed
//! by fixed vectors.

use async_trait::async_trait;
use tablechain_core::Row;

use crate::error::Result;
use crate::traits::{ColumnInfo, TableSource};

/// A fixed in-memory table.
#[derive(Debug, Clone)]
pub struct MemoryTable {
    name: String,
    columns: Vec<ColumnInfo>,
    rows: Vec<Row>,
}

impl MemoryTable {
    /// Create a table from columns and rows.
    ///
    /// Rows must already be aligned with the column order; the table
    /// hands them out exactly as given.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnInfo>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    /// Create a table from bare column names (type reported as `text`)
    /// and cell vectors. Handy in tests.
    pub fn from_cells(
        name: impl Into<String>,
        column_names: &[&str],
        rows: Vec<Vec<&str>>,
    ) -> Self {
        Self::new(
            name,
            column_names
                .iter()
                .map(|n| ColumnInfo::new(*n, "text"))
                .collect(),
            rows.into_iter().map(Row::from).collect(),
        )
    }
}

#[async_trait]
impl TableSource for MemoryTable {
    fn table_name(&self) -> &str {
        &self.name
    }

    async fn columns(&self) -> Result<Vec<ColumnInfo>> {
        Ok(self.columns.clone())
    }

    async fn fetch_rows(&self) -> Result<Vec<Row>> {
        Ok(self.rows.clone())
    }
}
