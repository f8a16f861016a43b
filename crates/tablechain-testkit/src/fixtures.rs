//! Test fixtures and helpers.
//!
//! Common tables for integration tests.

use tablechain_source::MemoryTable;

/// The canonical two-row scenario: columns `a`,`b`, rows
/// `["1","x"]`, `["2","y"]`.
pub fn two_by_two_table() -> MemoryTable {
    MemoryTable::from_cells("t", &["a", "b"], vec![vec!["1", "x"], vec!["2", "y"]])
}

/// Expected identifiers for [`two_by_two_table`], row by row.
pub const TWO_BY_TWO_CIDS: [&str; 2] = [
    "bafkreic6lc2acvishrqo6yqexizlmt5x3h7t2nksvgsjqr73ium5sfhvia",
    "bafkreiges2oc5pmpzvrfozt6shhjixcnymgpqte4j77pji3uxzr67dr5fm",
];

/// A three-row table with a wider column set.
pub fn people_table() -> MemoryTable {
    MemoryTable::from_cells(
        "people",
        &["id", "name", "born"],
        vec![
            vec!["1", "ada", "1815"],
            vec!["2", "grace", "1906"],
            vec!["3", "edsger", "1930"],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablechain::TableHasher;

    #[tokio::test]
    async fn test_two_by_two_matches_expected_cids() {
        let report = TableHasher::new(two_by_two_table()).run().await.unwrap();
        for (record, expected) in report.records.iter().zip(TWO_BY_TWO_CIDS) {
            assert_eq!(record.cid.as_str(), expected);
        }
    }

    #[tokio::test]
    async fn test_people_table_shape() {
        let report = TableHasher::new(people_table()).run().await.unwrap();
        assert_eq!(report.columns.len(), 3);
        assert_eq!(report.records.len(), 3);
    }
}
