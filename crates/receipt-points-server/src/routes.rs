//! Router and shared state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use receipt_points::store::MemoryStore;
use receipt_points::Processor;
use tower_http::trace::TraceLayer;

use crate::handlers::{get_points, health, process_receipt};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<Processor<MemoryStore>>,
}

impl AppState {
    pub fn new(processor: Processor<MemoryStore>) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
