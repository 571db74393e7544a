//! Request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use receipt_points::{Points, Receipt, ReceiptId};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::AppState;

/// Body of a successful submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Body of a successful lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Body of the health check.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

/// `POST /receipts/process`
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload?;
    let id = state.processor.process(&receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.processor.points(&ReceiptId::new(id)).await?;
    Ok(Json(PointsResponse { points }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let receipts = state.processor.record_count().await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        receipts,
    }))
}
