//! # Tablechain Core
//!
//! Pure primitives for Tablechain: canonical row encoding and the
//! hash-chain fold that turns an ordered table into a chain of
//! content-addressed row identifiers.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over ordered text cells.
//!
//! ## Key Types
//!
//! - [`ColumnOrder`] - The fixed, explicit column order for a run
//! - [`Row`] - One row's ordered text cells
//! - [`RowEncoder`] - Deterministic canonical bytes for a row
//! - [`ChainState`] - The running digest, carried as hex text
//! - [`RowCid`] - CIDv1 identifier derived for each row
//!
//! ## Chaining
//!
//! Each row's identifier depends on every prior row's content, in order.
//! Changing, inserting, deleting, or reordering any row changes the
//! identifier of that row and of every row after it. See [`chain`].

pub mod chain;
pub mod crypto;
pub mod encoder;
pub mod error;
pub mod types;

pub use chain::{advance, hash_rows, ChainState};
pub use crypto::{cid_for_digest, Sha256Hash};
pub use encoder::RowEncoder;
pub use error::{ChainError, EncodingError, HashError};
pub use types::{ColumnOrder, Row, RowCid};
