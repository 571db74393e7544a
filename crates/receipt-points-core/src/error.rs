//! Error types for Receipt Points Core.

use thiserror::Error;

/// A receipt field that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid purchase date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid purchase time {0:?}: expected HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("invalid amount in {field}: {value:?} is not a valid non-negative decimal")]
    InvalidAmount { field: String, value: String },
}

impl ValidationError {
    /// Name of the receipt field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidDate(_) => "purchaseDate",
            ValidationError::InvalidTime(_) => "purchaseTime",
            ValidationError::InvalidAmount { field, .. } => field,
        }
    }
}
