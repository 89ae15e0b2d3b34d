//! Diagram routes: on-demand rendering of an expanded card's diagram and
//! the local scoped save.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::mermaid::{self, RenderOutcome};
use crate::services;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RenderDiagramBody {
    pub diagram: String,
}

/// `POST /render-diagram` — validate and render a diagram source.
///
/// A candidate that fails validation or rendering comes back as
/// `{ "skipped": true }` with status 200; render trouble is never an
/// error to the client.
pub async fn render_diagram(
    State(state): State<AppState>,
    Json(body): Json<RenderDiagramBody>,
) -> Json<serde_json::Value> {
    match mermaid::render_diagram(state.renderer.as_ref(), &body.diagram).await {
        RenderOutcome::Rendered { svg } => Json(json!({ "svg": svg })),
        RenderOutcome::Skipped => Json(json!({ "skipped": true })),
    }
}

#[derive(Deserialize)]
pub struct SaveDiagramBody {
    pub diagram: String,
    pub raw: String,
}

/// `POST /save-diagram` — persist a diagram-plus-source pair locally.
pub async fn save_diagram(
    State(state): State<AppState>,
    Json(body): Json<SaveDiagramBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match services::save::save_diagram(&state.save_dir, &body.diagram, &body.raw) {
        Ok(key) => Ok(Json(json!({ "key": key }))),
        Err(e) => {
            warn!(error = %e, "diagram save failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
#[path = "diagrams_test.rs"]
mod tests;
