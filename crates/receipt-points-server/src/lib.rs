//! # Receipt Points Server
//!
//! JSON over HTTP in front of the [`Processor`](receipt_points::Processor).
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | `POST` | `/receipts/process` | `{"id": "..."}` |
//! | `GET` | `/receipts/{id}/points` | `{"points": 28}` |
//! | `GET` | `/health` | `{"status": "ok", "receipts": 2}` |
//!
//! Malformed receipts get `400`, unknown identifiers `404`, anything else
//! from the store `500`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::{router, AppState};
