//! The hash chain: a running digest folded over rows in table order.
//!
//! Each step concatenates the previous state's hex text with the row's
//! canonical bytes, hashes that, and derives the row's identifier from a
//! second hash of the new state text. The fold is strictly sequential;
//! every step consumes the state the previous step produced.

use crate::crypto::{cid_for_digest, Sha256Hash};
use crate::encoder::RowEncoder;
use crate::error::{ChainError, HashError};
use crate::types::{Row, RowCid};

/// The chain's running state.
///
/// `Empty` before row 0, then `Chained` with the lowercase hex text of
/// the digest through the last processed row. The state is carried as
/// text, not raw bytes: each step concatenates this hex string with the
/// next row's canonical bytes. That textual carry, and the fact that the
/// identifier hashes the hex text rather than the raw digest, are part of
/// the identifier format. Chains already minted depend on both, so do not
/// "fix" either to raw-byte chaining.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChainState {
    /// No row processed yet. Contributes the empty string to the first
    /// step's preimage.
    #[default]
    Empty,
    /// Digest through the last processed row, as lowercase hex text.
    Chained(String),
}

impl ChainState {
    /// The state's text contribution to the next preimage.
    pub fn as_text(&self) -> &str {
        match self {
            ChainState::Empty => "",
            ChainState::Chained(hex) => hex,
        }
    }

    /// True before any row has been processed.
    pub fn is_empty(&self) -> bool {
        matches!(self, ChainState::Empty)
    }

    /// The digest hex text, if any row has been processed.
    pub fn digest_hex(&self) -> Option<&str> {
        match self {
            ChainState::Empty => None,
            ChainState::Chained(hex) => Some(hex),
        }
    }
}

/// Advance the chain by one row.
///
/// Takes the current state and the row's canonical bytes, returns the new
/// state and the row's content identifier. The caller threads the returned
/// state into the next call; nothing is held globally.
///
/// Derivation:
/// 1. `D1 = SHA-256(state_text ++ encoded_row)`
/// 2. new state = hex(D1)
/// 3. `D2 = SHA-256(utf8(hex(D1)))` — the hex text is hashed, not the
///    raw digest bytes
/// 4. identifier = CIDv1(raw, multihash(sha2-256, D2))
pub fn advance(state: &ChainState, encoded_row: &[u8]) -> Result<(ChainState, RowCid), ChainError> {
    let state_text = state.as_text();

    let mut preimage = Vec::with_capacity(state_text.len() + encoded_row.len());
    preimage.extend_from_slice(state_text.as_bytes());
    preimage.extend_from_slice(encoded_row);

    let d1 = Sha256Hash::hash(&preimage);
    let next = ChainState::Chained(d1.to_hex());

    let d2 = Sha256Hash::hash(next.as_text().as_bytes());
    let cid = cid_for_digest(&d2)?;

    Ok((next, cid))
}

/// Fold every row through the chain, in order.
///
/// Returns one identifier per row plus the final state. Fails fast on the
/// first bad row, reporting its 0-based index; continuing past a failed
/// row would leave a silent gap in the chain.
pub fn hash_rows<'a, I>(encoder: &RowEncoder, rows: I) -> Result<(Vec<RowCid>, ChainState), HashError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut state = ChainState::Empty;
    let mut cids = Vec::new();

    for (row_index, row) in rows.into_iter().enumerate() {
        let encoded = encoder
            .encode(row)
            .map_err(|source| HashError::Encoding { row: row_index, source })?;

        let (next, cid) =
            advance(&state, &encoded).map_err(|source| HashError::Chain { row: row_index, source })?;

        state = next;
        cids.push(cid);
    }

    Ok((cids, state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnOrder;

    fn two_column_encoder() -> RowEncoder {
        RowEncoder::new(ColumnOrder::from(vec!["a", "b"]))
    }

    #[test]
    fn test_empty_state_text() {
        assert_eq!(ChainState::Empty.as_text(), "");
        assert!(ChainState::Empty.is_empty());
        assert!(ChainState::Empty.digest_hex().is_none());
    }

    #[test]
    fn test_advance_produces_hex_state() {
        let (state, _) = advance(&ChainState::Empty, br#"["1","x"]"#).unwrap();
        let hex = state.digest_hex().unwrap();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_advance_depends_on_state() {
        let encoded = br#"["2","y"]"#;
        let (_, from_empty) = advance(&ChainState::Empty, encoded).unwrap();
        let (seeded, _) = advance(&ChainState::Empty, br#"["1","x"]"#).unwrap();
        let (_, from_seeded) = advance(&seeded, encoded).unwrap();
        assert_ne!(from_empty, from_seeded);
    }

    #[test]
    fn test_advance_first_step_matches_direct_hash() {
        // With an empty state the preimage is exactly the encoded row.
        let encoded = br#"["1","x"]"#;
        let (state, _) = advance(&ChainState::Empty, encoded).unwrap();
        assert_eq!(
            state.digest_hex().unwrap(),
            Sha256Hash::hash(encoded).to_hex()
        );
    }

    #[test]
    fn test_hash_rows_empty_table() {
        let encoder = two_column_encoder();
        let rows: Vec<Row> = vec![];
        let (cids, state) = hash_rows(&encoder, &rows).unwrap();
        assert!(cids.is_empty());
        assert!(state.is_empty());
    }

    #[test]
    fn test_hash_rows_one_cid_per_row() {
        let encoder = two_column_encoder();
        let rows: Vec<Row> = vec![
            Row::from(vec!["1", "x"]),
            Row::from(vec!["2", "y"]),
            Row::from(vec!["3", "z"]),
        ];
        let (cids, state) = hash_rows(&encoder, &rows).unwrap();
        assert_eq!(cids.len(), 3);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_hash_rows_mutation_changes_suffix_only() {
        let encoder = two_column_encoder();
        let original: Vec<Row> = vec![
            Row::from(vec!["1", "x"]),
            Row::from(vec!["2", "y"]),
            Row::from(vec!["3", "z"]),
        ];
        let mut mutated = original.clone();
        mutated[1] = Row::from(vec!["2", "Y"]);

        let (a, _) = hash_rows(&encoder, &original).unwrap();
        let (b, _) = hash_rows(&encoder, &mutated).unwrap();

        assert_eq!(a[0], b[0]);
        assert_ne!(a[1], b[1]);
        assert_ne!(a[2], b[2]);
    }

    #[test]
    fn test_hash_rows_swap_detected() {
        let encoder = two_column_encoder();
        let forward: Vec<Row> = vec![Row::from(vec!["1", "x"]), Row::from(vec!["2", "y"])];
        let swapped: Vec<Row> = vec![Row::from(vec!["2", "y"]), Row::from(vec!["1", "x"])];

        let (a, _) = hash_rows(&encoder, &forward).unwrap();
        let (b, _) = hash_rows(&encoder, &swapped).unwrap();
        assert_ne!(a[0], b[0]);
        assert_ne!(a[1], b[1]);
    }

    #[test]
    fn test_hash_rows_reports_row_index() {
        let encoder = two_column_encoder();
        let rows: Vec<Row> = vec![
            Row::from(vec!["1", "x"]),
            Row::from(vec!["short"]),
        ];
        let err = hash_rows(&encoder, &rows).unwrap_err();
        assert_eq!(err.row(), 1);
        assert!(matches!(err, HashError::Encoding { .. }));
    }

    #[test]
    fn test_replay_prefix_from_empty() {
        // Any prefix of the chain can be recomputed in isolation by
        // replaying from Empty.
        let encoder = two_column_encoder();
        let rows: Vec<Row> = vec![Row::from(vec!["1", "x"]), Row::from(vec!["2", "y"])];

        let (full, _) = hash_rows(&encoder, &rows).unwrap();
        let (prefix, _) = hash_rows(&encoder, &rows[..1]).unwrap();
        assert_eq!(full[0], prefix[0]);
    }
}
