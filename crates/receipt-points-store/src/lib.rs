//! # Receipt Points Store
//!
//! Storage abstraction for Receipt Points. Provides a trait-based interface
//! for score records with an in-memory implementation.
//!
//! ## Key Types
//!
//! - [`PointsStore`] - The async trait for all storage operations
//! - [`MemoryStore`] - Snapshot-based in-memory storage
//! - [`StoreError`] - Duplicate and missing identifiers
//!
//! ## Usage
//!
//! ```rust
//! use receipt_points_core::ReceiptId;
//! use receipt_points_store::{MemoryStore, PointsStore};
//!
//! # async fn example() -> receipt_points_store::Result<()> {
//! let store = MemoryStore::new();
//! let id = ReceiptId::new("7335f748-ec9d-417b-a335-36ce7a17290f");
//!
//! store.put(&id, 28).await?;
//! assert_eq!(store.get(&id).await?, 28);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Notes
//!
//! - **Insert once**: a second `put` for an identifier fails with `DuplicateId`
//!   and leaves the first record in place
//! - **No updates, no deletes**: records live as long as the store
//! - **Snapshot reads**: readers never wait for writers

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::{MemoryStore, Snapshot};
pub use traits::PointsStore;
