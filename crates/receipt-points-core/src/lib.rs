//! # Receipt Points Core
//!
//! Pure primitives for Receipt Points: receipts, validation, and scoring.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over receipt data.
//!
//! ## Key Types
//!
//! - [`Receipt`] - A submitted purchase receipt, exactly as it arrives on the wire
//! - [`ValidatedReceipt`] - The same receipt with dates, times and amounts parsed
//! - [`ReceiptId`] - Opaque identifier a score is stored under
//! - [`ScoreBreakdown`] - Per-rule contributions that add up to a score
//!
//! ## Scoring
//!
//! ```rust
//! use receipt_points_core::{score, ReceiptBuilder};
//!
//! let receipt = ReceiptBuilder::new("M&M Corner Market")
//!     .purchased_at("2022-03-20", "14:33")
//!     .item("Gatorade", "2.25")
//!     .item("Gatorade", "2.25")
//!     .item("Gatorade", "2.25")
//!     .item("Gatorade", "2.25")
//!     .total("9.00")
//!     .build();
//!
//! assert_eq!(score(&receipt).unwrap(), 109);
//! ```
//!
//! All money is handled as exact decimals. See [`rules`] for the rule table.

pub mod error;
pub mod receipt;
pub mod rules;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use receipt::{Item, Receipt, ReceiptBuilder, ValidatedItem, ValidatedReceipt};
pub use rules::{score, score_breakdown, score_validated, Rule, RuleContribution, ScoreBreakdown};
pub use types::{Points, ReceiptId};
pub use validation::validate_receipt;
