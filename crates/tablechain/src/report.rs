//! Report types: what a table-hashing run hands back to the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tablechain_core::RowCid;
use tablechain_source::ColumnInfo;

/// One hashed row: its content identifier plus the source cells.
///
/// The cell map is for display and storage only; hashing uses the
/// explicit column order, never this map's iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    /// The row's content identifier.
    #[serde(rename = "row_hash")]
    pub cid: RowCid,

    /// Column name -> cell value.
    pub cells: BTreeMap<String, String>,
}

/// The result of hashing one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    /// The table that was scanned.
    pub table_name: String,

    /// Discovered columns, in canonical order.
    pub columns: Vec<ColumnInfo>,

    /// One record per row, in table scan order.
    pub records: Vec<RowRecord>,
}

impl TableReport {
    /// The plain-data view: table name and bare cell maps, no hashes.
    pub fn plain_json(&self) -> serde_json::Value {
        let view = PlainView {
            table_name: &self.table_name,
            records: self.records.iter().map(|r| &r.cells).collect(),
        };
        serde_json::to_value(view).expect("report serialization cannot fail")
    }

    /// The hashed view: table name and per-row identifier + cells.
    pub fn hashed_json(&self) -> serde_json::Value {
        let view = HashedView {
            table_name: &self.table_name,
            rows: &self.records,
        };
        serde_json::to_value(view).expect("report serialization cannot fail")
    }
}

#[derive(Serialize)]
struct PlainView<'a> {
    table_name: &'a str,
    records: Vec<&'a BTreeMap<String, String>>,
}

#[derive(Serialize)]
struct HashedView<'a> {
    table_name: &'a str,
    rows: &'a [RowRecord],
}
