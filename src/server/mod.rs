//! # HTTP Server for Card and Logo Design
//!
//! JSON API over the design engine: card concepts, render plans, icon
//! templates, background icon batches and a small blob cache.
//!
//! ## Usage
//!
//! ```bash
//! cardgen serve --listen 0.0.0.0:5000
//! curl -X POST localhost:5000/api/logos/gen-chevrons-1/render \
//!     -H 'content-type: application/json' -d '{"companyName":"Nova"}'
//! ```

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::CardgenError;

/// Request body limit; cached data URLs can be large.
const BODY_LIMIT: usize = 20 * 1024 * 1024;

/// Build the router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        // Card API
        .route("/api/generate-card-design", post(handlers::cards::generate))
        .route("/api/templates/:industry", get(handlers::cards::industry_templates))
        .route("/api/card-templates", get(handlers::cards::card_templates))
        .route("/api/card/layout", post(handlers::cards::layout))
        .route("/api/card/drag", post(handlers::cards::drag))
        // Logo API
        .route("/api/generate-logo-design", post(handlers::logos::generate))
        .route("/api/logo-suggestions/:industry", get(handlers::logos::suggestions))
        .route("/api/logos/templates", get(handlers::logos::templates))
        .route("/api/logos/randomize", post(handlers::logos::randomize))
        .route("/api/logos/:id/render", post(handlers::logos::render))
        .route("/api/logos/last/:request_id", get(handlers::logos::take_last))
        // Jobs API
        .route("/api/jobs", get(handlers::jobs::list))
        .route("/api/jobs/icons", post(handlers::jobs::submit_icons))
        .route("/api/jobs/:id", get(handlers::jobs::get))
        // Blob cache
        .route("/api/cache", post(handlers::cache::store))
        .route("/cache/:id", get(handlers::cache::fetch))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use cardgen::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), cardgen::CardgenError> {
/// serve(ServerConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), CardgenError> {
    let app_state = Arc::new(AppState::new(config.clone())?);

    // Spawn background cache cleanup task
    tokio::spawn(cleanup_caches(app_state.clone()));

    let app = router(app_state.clone());

    log::info!("cardgen HTTP server starting...");
    log::info!("Listening on: {}", config.listen_addr);
    match &config.provider_url {
        Some(url) => log::info!("Design provider: {} (built-in fallback)", url),
        None => log::info!("Design provider: built-in concepts"),
    }
    log::info!("API available at http://{}/api", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            CardgenError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| CardgenError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}

/// Background task to drop expired logo entries and finished jobs.
async fn cleanup_caches(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(Duration::from_secs(60));

    loop {
        interval.tick().await;

        let removed = state.logos.clear_older_than(state.config.cache_ttl).await;
        if removed > 0 {
            log::info!(
                "[cache] Cleaned up {} expired logo entries ({} remaining)",
                removed,
                state.logos.len().await
            );
        }

        let removed = state.jobs.clear_older_than(state.config.cache_ttl).await;
        if removed > 0 {
            log::info!(
                "[jobs] Cleaned up {} finished jobs ({} remaining)",
                removed,
                state.jobs.len().await
            );
        }
    }
}
