//! # Receipt Points Testkit
//!
//! Testing utilities for Receipt Points.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known receipts with their expected scores
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use receipt_points_testkit::vectors::all_vectors;
//! use receipt_points_core::score;
//!
//! for vector in all_vectors() {
//!     assert_eq!(score(&vector.receipt()).unwrap(), vector.expected_points, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receipt_points_testkit::generators::valid_receipt;
//!
//! proptest! {
//!     #[test]
//!     fn score_is_deterministic(receipt in valid_receipt()) {
//!         prop_assert_eq!(score(&receipt).unwrap(), score(&receipt).unwrap());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{receipt_json, TestFixture};
pub use generators::{valid_receipt, ReceiptParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
