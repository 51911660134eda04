//! HTTP handlers for the server.

pub mod cache;
pub mod cards;
pub mod jobs;
pub mod logos;

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "OK",
        message: "cardgen API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
