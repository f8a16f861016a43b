//! # Tablechain
//!
//! Tamper-evident row hashing for tabular data.
//!
//! ## Overview
//!
//! Tablechain turns an ordered table into a chain of content-addressed
//! row identifiers: each row's identifier depends on every prior row's
//! content, so altering, reordering, inserting, or deleting any row
//! changes the identifier of that row and of all rows after it.
//!
//! ## Key Concepts
//!
//! - **Column order**: captured once per run; rows are ordered cells
//!   aligned to it. Encoding never depends on map iteration order.
//! - **Chain state**: the running digest, carried as hex text and
//!   threaded through a strictly sequential fold.
//! - **Row identifier**: a CIDv1 (`raw` codec, sha2-256 multihash)
//!   derived for each row from the chain state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tablechain::{TableHasher, TableReport};
//! use tablechain::source::{MySqlConfig, MySqlTable};
//!
//! async fn example() {
//!     let config = MySqlConfig::local("user", "secret", "shop");
//!     let source = MySqlTable::connect(&config, "orders").await.unwrap();
//!
//!     let report: TableReport = TableHasher::new(source).run().await.unwrap();
//!     for record in &report.records {
//!         println!("{}", record.cid);
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `tablechain::core` - Pure primitives (encoder, chain, identifiers)
//! - `tablechain::source` - Table sources (MySQL, in-memory)

pub mod error;
pub mod hasher;
pub mod report;

// Re-export component crates
pub use tablechain_core as core;
pub use tablechain_source as source;

// Re-export main types for convenience
pub use error::{Result, TabulateError};
pub use hasher::TableHasher;
pub use report::{RowRecord, TableReport};

// Re-export commonly used core types
pub use tablechain_core::{ChainState, ColumnOrder, Row, RowCid, RowEncoder};
pub use tablechain_source::{ColumnInfo, MemoryTable, TableSource};
