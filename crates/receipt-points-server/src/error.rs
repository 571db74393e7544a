//! HTTP error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_points::{ProcessorError, ReceiptId, ValidationError};
use serde_json::json;
use thiserror::Error;

/// Errors returned to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body is not a receipt document.
    #[error("malformed request body: {0}")]
    BadRequest(String),

    /// The receipt has a malformed field.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No score is stored under the identifier.
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),

    /// Anything the client cannot fix.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::Validation(_) => "invalid_receipt",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<ProcessorError> for ApiError {
    fn from(e: ProcessorError) -> Self {
        match e {
            ProcessorError::Validation(v) => Self::Validation(v),
            ProcessorError::NotFound(id) => Self::NotFound(id),
            ProcessorError::Store(s) => Self::Internal(s.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details go to the log only.
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "error": self.error_code(),
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
