//! Golden vectors: known tables with expected chain states and
//! identifiers, for cross-implementation verification.
//!
//! Each vector pins the full chain: per-row state digests (hex) and
//! per-row identifiers. A change in the encoder, the chain fold, or
//! the identifier derivation will break at least one of them.

use tablechain_core::{advance, ChainState, ColumnOrder, Row, RowEncoder};

/// A known table with its expected chain, row by row.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Short name for failure messages.
    pub name: &'static str,
    /// Column order the table is encoded under.
    pub columns: &'static [&'static str],
    /// Row cells, aligned to `columns`.
    pub rows: &'static [&'static [&'static str]],
    /// Expected chain state after each row, as lowercase hex.
    pub states: &'static [&'static str],
    /// Expected identifier for each row.
    pub cids: &'static [&'static str],
}

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "two_rows_ab",
            columns: &["a", "b"],
            rows: &[&["1", "x"], &["2", "y"]],
            states: &[
                "0ec8878371262b937781335a8f10e6419e3fe6f58c6d217137d87a744b61e9cd",
                "c6a56532cf1f4f9fc663e5e7ee0bc5fd8dba333b59f89bdc97e7dd8085c7605a",
            ],
            cids: &[
                "bafkreic6lc2acvishrqo6yqexizlmt5x3h7t2nksvgsjqr73ium5sfhvia",
                "bafkreiges2oc5pmpzvrfozt6shhjixcnymgpqte4j77pji3uxzr67dr5fm",
            ],
        },
        GoldenVector {
            name: "two_rows_ab_tampered",
            columns: &["a", "b"],
            rows: &[&["1", "z"], &["2", "y"]],
            states: &[
                "e4852847188c6797e4b61db705d839976e900944e2e2a465e04355b7aef7dfd6",
                "b63e3d609bf06dea1ca9bc13011099c85c2a9446f370e8b622ad4e7c5a0e2b29",
            ],
            cids: &[
                "bafkreih456nxth5nnzoa3zggtzrjrz4qmkp6y2mnvu3j55xs6z2vhbclqu",
                "bafkreibwlage5wk2p2tw5bhmi2nqot5ciqi5piz7ej3wamfukvasb5pdou",
            ],
        },
        GoldenVector {
            name: "single_empty_cell",
            columns: &["v"],
            rows: &[&[""]],
            states: &["055539df4a0b804c58caf46c0cd2941af10d64c1395ddd8e50b5f55d945841e6"],
            cids: &["bafkreihrqt7wdofpq3qwwfyzzpmqgo4u3anp2hn6dyd4nz4p236zrtiopi"],
        },
        GoldenVector {
            name: "html_escaped_cells",
            columns: &["l", "r"],
            rows: &[&["a<b", "c&d"]],
            states: &["4f930bea355db382e244d99ca736c2ad70039b3e0c34bf725ede8e7caa9f491e"],
            cids: &["bafkreifuxp7vx7ikhyer5vqg5pn2dbku5rldkzr4zw3my2qevhdidakpnm"],
        },
        GoldenVector {
            name: "unicode_cells",
            columns: &["l", "r"],
            rows: &[&["héllo", "wörld"]],
            states: &["9d6fa88706219f648235d2955d253135f08c9224376a37c4a3da185be7117db1"],
            cids: &["bafkreihxchk6632cj4qqpye4oqzpnzdzopmshpgo2gb3xi6iea6wbeihbi"],
        },
        GoldenVector {
            name: "quotes_and_backslash",
            columns: &["l", "r"],
            rows: &[&[r#"say "hi""#, r"a\b"]],
            states: &["855dde760310637997f51766b8175877b7e5d96a05485540ef393c2e505e1737"],
            cids: &["bafkreiesfo5suvx2jkiwfcuicf5q53dikpmxyorpldujl2bcj3q35zwqi4"],
        },
        GoldenVector {
            name: "people_three_rows",
            columns: &["id", "name", "born"],
            rows: &[
                &["1", "ada", "1815"],
                &["2", "grace", "1906"],
                &["3", "edsger", "1930"],
            ],
            states: &[
                "d06cb18df87d851c3a0e81220c8320647de91621f6cdb8fe70927b3d8c9a5f2d",
                "e8c4aea9d1de85a06fe0e1024847044af79f2d59badd657296f999644f9aea29",
                "6ba7d87bdf49f399804e8391e47ac70bfef08288f9189b6a13e9e91dcda105d1",
            ],
            cids: &[
                "bafkreifvfrbqbllvgmlw6htmhzbae3k5a52rjxn3tqmo5ssgk3vyp6m6fi",
                "bafkreib44v5cdwepvr4ipldwi3tabjqn2du5czbh5e27t3xdqqrbefrelu",
                "bafkreif4rzmqbikxperttxp2q26qnj4pngoxdhd77bwblyvvalakla3ehe",
            ],
        },
    ]
}

/// Replay the chain for `vector` and panic on any divergence from its
/// expected states or identifiers.
pub fn verify_vector(vector: &GoldenVector) {
    let columns = ColumnOrder::new(vector.columns.iter().map(|c| c.to_string()).collect());
    let encoder = RowEncoder::new(columns);

    let mut state = ChainState::default();
    for (i, cells) in vector.rows.iter().enumerate() {
        let row = Row::from(cells.to_vec());
        let encoded = encoder
            .encode(&row)
            .unwrap_or_else(|e| panic!("{}: row {i} failed to encode: {e}", vector.name));
        let (next, cid) = advance(&state, &encoded)
            .unwrap_or_else(|e| panic!("{}: row {i} failed to chain: {e}", vector.name));

        assert_eq!(
            next.as_text(),
            vector.states[i],
            "{}: state mismatch at row {i}",
            vector.name
        );
        assert_eq!(
            cid.as_str(),
            vector.cids[i],
            "{}: identifier mismatch at row {i}",
            vector.name
        );
        state = next;
    }
}
