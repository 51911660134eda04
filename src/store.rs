//! # Caches
//!
//! Explicit in-memory stores owned by the server state:
//!
//! - [`BlobStore`]: content-addressed image bytes (`sha256.ext` ids)
//! - [`LogoStore`]: the last generated logo URL per request id
//!
//! Both are constructed once and shared behind an `Arc`; nothing here is
//! process-global.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::error::CardgenError;

/// URL prefix blobs are served under.
pub const CACHE_URL_PREFIX: &str = "/cache/";

// ============================================================================
// BLOB STORE
// ============================================================================

/// A stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Arc<Vec<u8>>,
    pub mime: String,
}

/// Result of storing a blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredBlob {
    pub id: String,
    pub url: String,
}

/// Content-addressed blob cache. Identical bytes always map to the same id.
#[derive(Debug, Default)]
pub struct BlobStore {
    blobs: RwLock<HashMap<String, Blob>>,
}

/// File extension for a mime type (`image/svg+xml` gives `svg`).
fn extension_for(mime: &str) -> Option<String> {
    let (_, subtype) = mime.split_once('/')?;
    let ext = subtype.split('+').next().unwrap_or(subtype).trim();
    if ext.is_empty() { None } else { Some(ext.to_lowercase()) }
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bytes and return their id.
    ///
    /// Without a mime type the format is sniffed from the bytes; unknown
    /// content is stored as `application/octet-stream` with a `bin` id.
    pub async fn store(&self, bytes: Vec<u8>, mime: Option<&str>) -> String {
        let hash = hex_digest(&bytes);
        let (mime, ext) = match mime.and_then(|m| extension_for(m).map(|e| (m.to_string(), e))) {
            Some(found) => found,
            None => match image::guess_format(&bytes) {
                Ok(format) => (
                    format.to_mime_type().to_string(),
                    format.extensions_str().first().copied().unwrap_or("bin").to_string(),
                ),
                Err(_) => ("application/octet-stream".to_string(), "bin".to_string()),
            },
        };
        let id = format!("{}.{}", hash, ext);

        let mut blobs = self.blobs.write().await;
        blobs.entry(id.clone()).or_insert_with(|| Blob {
            bytes: Arc::new(bytes),
            mime,
        });
        id
    }

    /// Decode and store a `data:image/...;base64,...` URL.
    pub async fn store_data_url(&self, data_url: &str) -> Result<StoredBlob, CardgenError> {
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| CardgenError::Store("Invalid data URL".into()))?;
        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| CardgenError::Store("Invalid data URL".into()))?;
        if !mime.starts_with("image/") || mime.contains(';') {
            return Err(CardgenError::Store(format!("Unsupported media type '{}'", mime)));
        }
        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| CardgenError::Store(format!("Invalid base64 payload: {}", e)))?;

        let id = self.store(bytes, Some(mime)).await;
        Ok(StoredBlob {
            url: format!("{}{}", CACHE_URL_PREFIX, id),
            id,
        })
    }

    pub async fn retrieve(&self, id: &str) -> Option<Blob> {
        self.blobs.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.blobs.write().await.clear();
    }
}

fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

// ============================================================================
// LOGO STORE
// ============================================================================

#[derive(Debug, Clone)]
struct LogoEntry {
    url: String,
    stored_at: Instant,
}

/// Last generated logo URL per request id.
#[derive(Debug, Default)]
pub struct LogoStore {
    entries: RwLock<HashMap<String, LogoEntry>>,
}

impl LogoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `url` for `request_id`. Empty ids or URLs are ignored.
    pub async fn set(&self, request_id: &str, url: &str) {
        self.set_at(request_id, url, Instant::now()).await;
    }

    async fn set_at(&self, request_id: &str, url: &str, stored_at: Instant) {
        if request_id.is_empty() || url.is_empty() {
            return;
        }
        self.entries.write().await.insert(
            request_id.to_string(),
            LogoEntry {
                url: url.to_string(),
                stored_at,
            },
        );
    }

    pub async fn get(&self, request_id: &str) -> Option<String> {
        self.entries.read().await.get(request_id).map(|e| e.url.clone())
    }

    /// Get and forget.
    pub async fn take(&self, request_id: &str) -> Option<String> {
        self.entries.write().await.remove(request_id).map(|e| e.url)
    }

    /// Drop entries older than `max_age`; returns how many were removed.
    pub async fn clear_older_than(&self, max_age: Duration) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.stored_at.elapsed() <= max_age);
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
