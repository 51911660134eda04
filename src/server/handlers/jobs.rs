//! Background job handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::CardgenError,
    icons::{self, BrandParams, IconTemplate},
    jobs::Job,
};

use super::super::state::AppState;

/// Most icons a single batch job renders.
const MAX_BATCH: usize = 1000;

/// Icons rendered between progress reports.
const CHUNK: usize = 16;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconBatchRequest {
    pub brand: BrandParams,
    /// Template ids to render; the first `count` registry entries otherwise.
    pub templates: Option<Vec<String>>,
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedIcon {
    pub id: String,
    pub label: String,
    pub svg: String,
}

#[derive(Debug, Serialize)]
pub struct JobCreated {
    pub id: String,
}

fn batch_templates(req: &IconBatchRequest) -> Result<Vec<IconTemplate>, CardgenError> {
    let templates = match &req.templates {
        Some(ids) => ids
            .iter()
            .map(|id| {
                icons::template_by_id(id)
                    .ok_or_else(|| CardgenError::InvalidRequest(format!("Unknown icon template '{}'", id)))
            })
            .collect::<Result<Vec<_>, _>>()?,
        None => icons::generate_templates(req.count.unwrap_or(icons::DEFAULT_TEMPLATE_COUNT)),
    };
    if templates.len() > MAX_BATCH {
        return Err(CardgenError::InvalidRequest(format!(
            "Batch of {} icons exceeds the limit of {}",
            templates.len(),
            MAX_BATCH
        )));
    }
    Ok(templates)
}

/// POST /api/jobs/icons - Render a batch of icons in the background.
pub async fn submit_icons(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IconBatchRequest>,
) -> Result<(StatusCode, Json<JobCreated>), (StatusCode, String)> {
    let templates = batch_templates(&req)?;
    let brand = req.brand;

    let id = state
        .jobs
        .submit(move |progress| async move {
            let total = templates.len();
            let mut rendered: Vec<RenderedIcon> = Vec::with_capacity(total);

            for chunk in templates.chunks(CHUNK) {
                let chunk = chunk.to_vec();
                let brand = brand.clone();
                let part = tokio::task::spawn_blocking(move || {
                    chunk
                        .par_iter()
                        .map(|t| RenderedIcon {
                            id: t.id.clone(),
                            label: t.label.clone(),
                            svg: t.render(&brand).to_svg(),
                        })
                        .collect::<Vec<_>>()
                })
                .await
                .map_err(|e| format!("render task failed: {}", e))?;

                rendered.extend(part);
                progress.set(rendered.len() as f64 * 100.0 / total as f64).await;
            }

            Ok::<_, String>(serde_json::json!({ "count": total, "icons": rendered }))
        })
        .await;

    Ok((StatusCode::ACCEPTED, Json(JobCreated { id })))
}

/// GET /api/jobs/:id - Poll a job.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Job>, (StatusCode, String)> {
    let job = state
        .jobs
        .poll(&id)
        .await
        .ok_or_else(|| CardgenError::NotFound(format!("Job '{}' not found", id)))?;
    Ok(Json(job))
}

/// GET /api/jobs - All jobs.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<Job>> {
    Json(state.jobs.list().await)
}
