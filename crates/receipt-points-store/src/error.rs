//! Error types for the store module.

use receipt_points_core::ReceiptId;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record already exists under this identifier.
    #[error("duplicate receipt id: {0}")]
    DuplicateId(ReceiptId),

    /// No record exists under this identifier.
    #[error("receipt not found: {0}")]
    NotFound(ReceiptId),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
