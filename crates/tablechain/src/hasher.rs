//! The TableHasher: drives a table source through the core hash chain.

use tablechain_core::{hash_rows, ColumnOrder, RowEncoder};
use tablechain_source::TableSource;

use crate::error::Result;
use crate::report::{RowRecord, TableReport};

/// Hashes every row of one table source, in scan order.
///
/// The hasher captures the source's column order once, folds all rows
/// through the chain, and pairs each identifier with its source cells.
/// It holds no state between runs; each [`run`](TableHasher::run) replays
/// the chain from empty.
pub struct TableHasher<S: TableSource> {
    source: S,
}

impl<S: TableSource> TableHasher<S> {
    /// Create a hasher over a source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Scan the table and hash every row.
    pub async fn run(&self) -> Result<TableReport> {
        let columns = self.source.columns().await?;
        let order = ColumnOrder::new(columns.iter().map(|c| c.name.clone()).collect());
        let encoder = RowEncoder::new(order);

        let rows = self.source.fetch_rows().await?;
        tracing::debug!(
            table = %self.source.table_name(),
            rows = rows.len(),
            "hashing table"
        );

        let (cids, _final_state) = hash_rows(&encoder, &rows)?;

        let records = cids
            .into_iter()
            .zip(rows.iter())
            .map(|(cid, row)| RowRecord {
                // Arity already validated by the encoder for every row.
                cells: encoder
                    .columns()
                    .zip_cells(row)
                    .unwrap_or_default(),
                cid,
            })
            .collect();

        Ok(TableReport {
            table_name: self.source.table_name().to_string(),
            columns,
            records,
        })
    }
}
