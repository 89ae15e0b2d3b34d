//! Rendering adapter — the validation gate in front of the external render
//! engine. A diagram that fails validation or rendering is skipped, never
//! an error: the worst user-visible outcome is a missing diagram panel.

use tracing::{debug, warn};
use uuid::Uuid;

use super::engine::RenderEngine;
use super::{looks_like_diagram, normalize};

/// Outcome of a render attempt. `Skipped` is a no-op, not a failure; the
/// diagnostic detail has already been logged by the time it is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { svg: String },
    Skipped,
}

/// Validate `candidate` and, if it plausibly is a diagram, render it
/// through `engine` under a fresh element id. Engine failures are caught
/// and converted to [`RenderOutcome::Skipped`]; they never propagate.
pub async fn render_diagram(engine: &dyn RenderEngine, candidate: &str) -> RenderOutcome {
    if !looks_like_diagram(candidate) {
        debug!(candidate_len = candidate.len(), "skipping render: no valid diagram found");
        return RenderOutcome::Skipped;
    }

    let source = normalize(candidate);
    // Fresh id per call so concurrently expanded cards never collide.
    let element_id = format!("diagram-{}", Uuid::new_v4().simple());

    match engine.render(&element_id, &source).await {
        Ok(svg) => RenderOutcome::Rendered { svg },
        Err(e) => {
            warn!(error = %e, %element_id, "diagram render failed; skipping");
            RenderOutcome::Skipped
        }
    }
}
