//! Architecture generation route: call the generator, parse the response,
//! return both the raw markdown and the typed options.

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extract::{ArchitectureOption, extract_options};
use crate::services;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateArchitectureBody {
    pub system_description: String,
    pub constraints: String,
}

#[derive(Serialize)]
pub struct GenerateArchitectureResponse {
    /// Raw markdown from the generator (or the fixed fallback string).
    pub result: String,
    /// Parsed candidate architectures, at most six, in document order.
    pub options: Vec<ArchitectureOption>,
}

/// `POST /generate-architecture` — generate candidates and parse them.
///
/// Never fails on generator trouble: the service layer substitutes the
/// fixed fallback string, which parses to an empty options list.
pub async fn generate_architecture(
    State(state): State<AppState>,
    Json(body): Json<GenerateArchitectureBody>,
) -> Json<GenerateArchitectureResponse> {
    let result = services::architect::generate(
        state.llm.as_ref(),
        &body.system_description,
        &body.constraints,
    )
    .await;

    let options = extract_options(&result);
    info!(options = options.len(), result_len = result.len(), "architecture response parsed");

    Json(GenerateArchitectureResponse { result, options })
}

#[cfg(test)]
#[path = "architect_test.rs"]
mod tests;
