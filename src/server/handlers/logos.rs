//! Logo API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    catalog::{self, LogoSuggestions},
    error::CardgenError,
    icons::{self, BrandParams, IconTemplate, VectorIcon},
    provider::{LogoConcept, LogoRequest},
    store::CACHE_URL_PREFIX,
};

use super::super::state::AppState;

/// Largest template page served in one response.
const MAX_ICON_TEMPLATES: usize = 1000;

#[derive(Debug, Serialize)]
pub struct LogoDesignsResponse {
    pub success: bool,
    pub provider: String,
    pub designs: Vec<LogoConcept>,
    pub message: &'static str,
}

/// POST /api/generate-logo-design - Generate logo concepts.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LogoRequest>,
) -> Result<Json<LogoDesignsResponse>, (StatusCode, String)> {
    req.validate()?;
    let designs = state.provider.logo_designs(&req).await?;
    Ok(Json(LogoDesignsResponse {
        success: true,
        provider: state.provider.name().to_string(),
        designs,
        message: "Logo designs generated successfully",
    }))
}

#[derive(Debug, Serialize)]
pub struct LogoSuggestionsResponse {
    pub suggestions: &'static LogoSuggestions,
    pub industry: String,
}

/// GET /api/logo-suggestions/:industry - Icon, color and style ideas.
pub async fn suggestions(Path(industry): Path<String>) -> Json<LogoSuggestionsResponse> {
    Json(LogoSuggestionsResponse {
        suggestions: catalog::logo_suggestions(&industry),
        industry,
    })
}

#[derive(Debug, Deserialize)]
pub struct CountQuery {
    pub count: Option<usize>,
}

/// GET /api/logos/templates?count=N - List procedural icon templates.
pub async fn templates(Query(query): Query<CountQuery>) -> Json<Vec<IconTemplate>> {
    let count = query
        .count
        .unwrap_or(icons::DEFAULT_TEMPLATE_COUNT)
        .min(MAX_ICON_TEMPLATES);
    Json(icons::generate_templates(count))
}

/// POST /api/logos/randomize - Pick a random template.
pub async fn randomize() -> Json<IconTemplate> {
    Json(icons::random_template())
}

/// Body of a render request: brand parameters plus an optional request id
/// to remember the result under.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(flatten)]
    pub brand: BrandParams,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub template: IconTemplate,
    pub svg: String,
    pub icon: VectorIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// POST /api/logos/:id/render - Render a template for a brand.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<RenderRequest>,
) -> Result<Json<RenderResponse>, (StatusCode, String)> {
    let template = icons::template_by_id(&id)
        .ok_or_else(|| CardgenError::NotFound(format!("Icon template '{}' not found", id)))?;

    let icon = template.render(&req.brand);
    let svg = icon.to_svg();

    let url = match req.request_id.as_deref().filter(|r| !r.is_empty()) {
        Some(request_id) => {
            let blob_id = state
                .blobs
                .store(svg.clone().into_bytes(), Some("image/svg+xml"))
                .await;
            let url = format!("{}{}", CACHE_URL_PREFIX, blob_id);
            state.logos.set(request_id, &url).await;
            Some(url)
        }
        None => None,
    };

    Ok(Json(RenderResponse {
        template,
        svg,
        icon,
        url,
    }))
}

#[derive(Debug, Serialize)]
pub struct LastLogoResponse {
    pub url: String,
}

/// GET /api/logos/last/:request_id - Take the last logo rendered for a request.
pub async fn take_last(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<String>,
) -> Result<Json<LastLogoResponse>, (StatusCode, String)> {
    let url = state.logos.take(&request_id).await.ok_or_else(|| {
        CardgenError::NotFound(format!("No logo stored for request '{}'", request_id))
    })?;
    Ok(Json(LastLogoResponse { url }))
}
