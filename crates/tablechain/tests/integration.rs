//! End-to-end tests: memory source through the full hashing pipeline.

use tablechain::{MemoryTable, TableHasher};

const ROW0_CID: &str = "bafkreic6lc2acvishrqo6yqexizlmt5x3h7t2nksvgsjqr73ium5sfhvia";
const ROW1_CID: &str = "bafkreiges2oc5pmpzvrfozt6shhjixcnymgpqte4j77pji3uxzr67dr5fm";

fn two_by_two() -> MemoryTable {
    MemoryTable::from_cells("t", &["a", "b"], vec![vec!["1", "x"], vec!["2", "y"]])
}

#[tokio::test]
async fn end_to_end_matches_golden_identifiers() {
    let report = TableHasher::new(two_by_two()).run().await.unwrap();

    assert_eq!(report.records[0].cid.as_str(), ROW0_CID);
    assert_eq!(report.records[1].cid.as_str(), ROW1_CID);
}

#[tokio::test]
async fn mutating_an_early_cell_changes_all_identifiers() {
    let tampered = MemoryTable::from_cells(
        "t",
        &["a", "b"],
        vec![vec!["1", "z"], vec!["2", "y"]],
    );
    let report = TableHasher::new(tampered).run().await.unwrap();

    assert_ne!(report.records[0].cid.as_str(), ROW0_CID);
    assert_ne!(report.records[1].cid.as_str(), ROW1_CID);
}

#[tokio::test]
async fn deleting_a_row_changes_later_identifiers() {
    let full = TableHasher::new(MemoryTable::from_cells(
        "t",
        &["a", "b"],
        vec![vec!["1", "x"], vec!["2", "y"], vec!["3", "z"]],
    ))
    .run()
    .await
    .unwrap();

    let dropped_middle = TableHasher::new(MemoryTable::from_cells(
        "t",
        &["a", "b"],
        vec![vec!["1", "x"], vec!["3", "z"]],
    ))
    .run()
    .await
    .unwrap();

    // Prefix before the deletion is untouched; everything after shifts.
    assert_eq!(full.records[0].cid, dropped_middle.records[0].cid);
    assert_ne!(full.records[2].cid, dropped_middle.records[1].cid);
}

#[tokio::test]
async fn empty_table_produces_empty_report() {
    let report = TableHasher::new(MemoryTable::from_cells("empty", &["a", "b"], vec![]))
        .run()
        .await
        .unwrap();

    assert!(report.records.is_empty());
    assert_eq!(report.hashed_json()["rows"], serde_json::json!([]));
}

#[tokio::test]
async fn report_json_views_carry_the_same_cells() {
    let report = TableHasher::new(two_by_two()).run().await.unwrap();

    let plain = report.plain_json();
    let hashed = report.hashed_json();

    assert_eq!(plain["records"][0], hashed["rows"][0]["cells"]);
    assert_eq!(hashed["rows"][0]["row_hash"], ROW0_CID);
}
