//! PointsStore trait: the abstract interface for score records.
//!
//! The service only talks to this trait, so tests can swap in their own
//! implementation.

use async_trait::async_trait;
use receipt_points_core::{Points, ReceiptId};

use crate::error::Result;

/// The PointsStore trait: insert-once, read-many storage of scores.
///
/// Every method is atomic with respect to every other call on the same store.
#[async_trait]
pub trait PointsStore: Send + Sync {
    /// Insert a new record.
    ///
    /// # Errors
    /// - `DuplicateId` if a record already exists under `id`. The existing
    ///   record is not touched.
    async fn put(&self, id: &ReceiptId, points: Points) -> Result<()>;

    /// Look up the points stored under `id`.
    ///
    /// # Errors
    /// - `NotFound` if nothing was ever stored under `id`.
    async fn get(&self, id: &ReceiptId) -> Result<Points>;

    /// Check whether a record exists.
    async fn contains(&self, id: &ReceiptId) -> Result<bool>;

    /// Number of records stored.
    async fn len(&self) -> Result<usize>;

    /// Whether the store holds no records.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
