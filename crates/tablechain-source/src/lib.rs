//! # Tablechain Source
//!
//! The collaborator boundary for Tablechain: ordered table scans behind
//! the [`TableSource`] trait, with a MySQL implementation and an
//! in-memory implementation for tests.
//!
//! A source is responsible for exactly two things: reporting the table's
//! column order (with database types, for display) and delivering every
//! row as ordered text cells, in table scan order. Hashing never happens
//! here; the core consumes what a source produces.
//!
//! ## Key Types
//!
//! - [`TableSource`] - The async trait for ordered table scans
//! - [`MySqlTable`] - MySQL-backed source via `sqlx`
//! - [`MemoryTable`] - In-memory source for tests
//! - [`ColumnInfo`] - Column name plus database-reported type

pub mod error;
pub mod memory;
pub mod mysql;
pub mod traits;

pub use error::{Result, SourceError};
pub use memory::MemoryTable;
pub use mysql::{MySqlConfig, MySqlTable};
pub use traits::{ColumnInfo, TableSource};
