//! Card design API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    catalog::{self, CardTemplate, Industry, IndustryTemplate},
    error::CardgenError,
    layout::{self, Canvas, DragEvent, DragState, LayoutOptions, RenderPlan},
    provider::CardDesignRequest,
    suggestion::DesignSuggestion,
};

use super::super::state::AppState;

/// Largest catalog page served in one response.
const MAX_CARD_TEMPLATES: usize = 5000;

#[derive(Debug, Serialize)]
pub struct CardDesignsResponse {
    pub success: bool,
    pub industry: Industry,
    pub provider: String,
    pub designs: Vec<DesignSuggestion>,
    pub message: &'static str,
}

/// POST /api/generate-card-design - Generate design concepts for card data.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CardDesignRequest>,
) -> Result<Json<CardDesignsResponse>, (StatusCode, String)> {
    req.validate()?;

    let industry = req
        .industry
        .as_deref()
        .and_then(Industry::parse)
        .unwrap_or_else(|| Industry::infer(req.card_data.title.as_deref().unwrap_or("")));

    let designs = state.provider.card_designs(&req).await?;

    Ok(Json(CardDesignsResponse {
        success: true,
        industry,
        provider: state.provider.name().to_string(),
        designs,
        message: "Card designs generated successfully",
    }))
}

#[derive(Debug, Serialize)]
pub struct IndustryTemplatesResponse {
    pub templates: &'static [IndustryTemplate],
    pub industry: String,
}

/// GET /api/templates/:industry - Starter palettes for an industry.
pub async fn industry_templates(Path(industry): Path<String>) -> Json<IndustryTemplatesResponse> {
    Json(IndustryTemplatesResponse {
        templates: catalog::industry_templates(&industry),
        industry,
    })
}

#[derive(Debug, Deserialize)]
pub struct CountQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CardTemplatesResponse {
    pub count: usize,
    pub templates: Vec<CardTemplate>,
}

/// GET /api/card-templates?count=N - The generated template library.
pub async fn card_templates(Query(query): Query<CountQuery>) -> Json<CardTemplatesResponse> {
    let count = query
        .count
        .unwrap_or(catalog::DEFAULT_CARD_TEMPLATES)
        .min(MAX_CARD_TEMPLATES);
    let templates = catalog::card_templates(count);
    Json(CardTemplatesResponse {
        count: templates.len(),
        templates,
    })
}

/// Body of a layout request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    #[serde(default)]
    pub suggestion: DesignSuggestion,
    #[serde(default)]
    pub canvas: Option<Canvas>,
    #[serde(default)]
    pub options: LayoutOptions,
}

/// POST /api/card/layout - Resolve a suggestion into a render plan.
pub async fn layout(Json(req): Json<LayoutRequest>) -> Result<Json<RenderPlan>, (StatusCode, String)> {
    let canvas = req.canvas.unwrap_or_default();
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(canvas.width) || !valid(canvas.height) {
        return Err(CardgenError::InvalidRequest(format!(
            "Canvas must have a positive size, got {}x{}",
            canvas.width, canvas.height
        ))
        .into());
    }

    Ok(Json(layout::apply_design(&req.suggestion, canvas, &req.options)))
}

/// Body of a drag request: a state (or a fresh one for `canvas`) and the
/// events to apply in order.
#[derive(Debug, Deserialize)]
pub struct DragRequest {
    #[serde(default)]
    pub state: Option<DragState>,
    #[serde(default)]
    pub canvas: Option<Canvas>,
    #[serde(default)]
    pub events: Vec<DragEvent>,
}

/// POST /api/card/drag - Run drag events through the reducer.
pub async fn drag(Json(req): Json<DragRequest>) -> Json<DragState> {
    let initial = req
        .state
        .unwrap_or_else(|| DragState::new(req.canvas.unwrap_or_default()));
    Json(req.events.into_iter().fold(initial, layout::apply_event))
}
