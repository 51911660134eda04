//! Blob cache handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::CardgenError, store::StoredBlob};

use super::super::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheRequest {
    pub data_url: String,
}

/// POST /api/cache - Store a base64 data URL.
pub async fn store(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CacheRequest>,
) -> Result<Json<StoredBlob>, (StatusCode, String)> {
    let stored = state.blobs.store_data_url(&req.data_url).await?;
    log::debug!("[cache] stored {}", stored.id);
    Ok(Json(stored))
}

/// GET /cache/:id - Serve stored bytes.
pub async fn fetch(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let blob = state
        .blobs
        .retrieve(&id)
        .await
        .ok_or_else(|| CardgenError::NotFound(format!("Blob '{}' not found", id)))?;

    Ok((
        [
            (header::CONTENT_TYPE, blob.mime.clone()),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable".to_string()),
        ],
        blob.bytes.as_ref().clone(),
    ))
}
