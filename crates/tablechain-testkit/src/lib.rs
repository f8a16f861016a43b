//! # Tablechain Testkit
//!
//! Testing utilities for Tablechain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known tables with expected states and
//!   identifiers for cross-implementation verification
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: ready-made tables for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use tablechain_testkit::vectors::{all_vectors, verify_vector};
//!
//! for vector in all_vectors() {
//!     verify_vector(&vector);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tablechain_testkit::generators::table;
//!
//! proptest! {
//!     #[test]
//!     fn chain_is_deterministic(t in table(4, 8)) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{people_table, two_by_two_table};
pub use generators::{cell, column_names, table, TableCase};
pub use vectors::{all_vectors, verify_vector, GoldenVector};
