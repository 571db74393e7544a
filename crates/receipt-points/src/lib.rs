//! # Receipt Points
//!
//! The unified API for Receipt Points: score a purchase receipt, file the
//! score under a fresh identifier, and look it up again later.
//!
//! ## Overview
//!
//! - **Rules**: a fixed table of arithmetic rules turns a receipt into points
//! - **Store**: scores are kept under opaque identifiers, written once, read many times
//! - **Identifiers**: fresh UUIDs, generated outside the store
//!
//! ## Usage
//!
//! ```rust
//! use receipt_points::{Processor, ProcessorConfig, ReceiptBuilder};
//! use receipt_points::store::MemoryStore;
//!
//! # async fn example() -> receipt_points::Result<()> {
//! let processor = Processor::new(MemoryStore::new(), ProcessorConfig::default());
//!
//! let receipt = ReceiptBuilder::new("Target")
//!     .purchased_at("2022-01-01", "13:01")
//!     .item("Mountain Dew 12PK", "6.49")
//!     .total("6.49")
//!     .build();
//!
//! let id = processor.process(&receipt).await?;
//! let points = processor.points(&id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Re-exports
//!
//! - `receipt_points::core` - Receipt types, validation, and rules
//! - `receipt_points::store` - Storage abstraction and the in-memory store

pub mod error;
pub mod id;
pub mod processor;

// Re-export component crates
pub use receipt_points_core as core;
pub use receipt_points_store as store;

// Re-export main types for convenience
pub use error::{ProcessorError, Result};
pub use id::{IdGenerator, UuidGenerator};
pub use processor::{Processor, ProcessorConfig};

// Re-export commonly used core types
pub use receipt_points_core::{
    Item, Points, Receipt, ReceiptBuilder, ReceiptId, Rule, ScoreBreakdown, ValidationError,
};
