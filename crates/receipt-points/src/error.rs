//! Error types for the Processor.

use receipt_points_core::{ReceiptId, ValidationError};
use receipt_points_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Processor operations.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// The receipt has a malformed field.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No score is stored under the identifier.
    #[error("receipt not found: {0}")]
    NotFound(ReceiptId),

    /// Storage error other than a missing record.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ProcessorError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ProcessorError::NotFound(id),
            other => ProcessorError::Store(other),
        }
    }
}

/// Result type for Processor operations.
pub type Result<T> = std::result::Result<T, ProcessorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let id = ReceiptId::new("missing");
        let err: ProcessorError = StoreError::NotFound(id.clone()).into();
        assert!(matches!(err, ProcessorError::NotFound(got) if got == id));
    }

    #[test]
    fn test_duplicate_stays_a_store_error() {
        let err: ProcessorError = StoreError::DuplicateId(ReceiptId::new("dup")).into();
        assert!(matches!(err, ProcessorError::Store(StoreError::DuplicateId(_))));
    }
}
