//! Server state and configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::error::CardgenError;
use crate::jobs::JobQueue;
use crate::provider::{DesignProvider, HttpProvider, LocalProvider};
use crate::store::{BlobStore, LogoStore};

/// How long remembered logos live before the cleanup task drops them.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;

/// Timeout for calls to an external design provider.
pub const PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:5000")
    pub listen_addr: String,
    /// Base URL of an external design service; built-in concepts when unset
    pub provider_url: Option<String>,
    /// Age after which logo store entries are evicted
    pub cache_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            provider_url: None,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub blobs: BlobStore,
    pub logos: LogoStore,
    pub jobs: JobQueue,
    pub provider: Arc<dyn DesignProvider>,
}

impl AppState {
    /// Build state, picking the provider from the configuration.
    pub fn new(config: ServerConfig) -> Result<Self, CardgenError> {
        let provider: Arc<dyn DesignProvider> = match config.provider_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Arc::new(HttpProvider::new(
                url,
                Duration::from_secs(PROVIDER_TIMEOUT_SECS),
            )?),
            _ => Arc::new(LocalProvider),
        };
        Ok(Self::with_provider(config, provider))
    }

    pub fn with_provider(config: ServerConfig, provider: Arc<dyn DesignProvider>) -> Self {
        Self {
            config,
            blobs: BlobStore::new(),
            logos: LogoStore::new(),
            jobs: JobQueue::new(),
            provider,
        }
    }
}
