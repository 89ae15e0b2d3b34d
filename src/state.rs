//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds handles to the two external collaborators (generation backend,
//! render engine) and the local save directory. There is no database and
//! no shared mutable state: parsed options are rebuilt from the current
//! response text on every request and hold no identity across calls.

use std::path::PathBuf;
use std::sync::Arc;

use crate::llm::LlmChat;
use crate::mermaid::engine::RenderEngine;

/// Shared application state, injected into Axum handlers via the State
/// extractor. Clone is required by Axum — all inner fields are Arc-wrapped
/// or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Optional generation client. `None` if LLM env vars are not
    /// configured; generation then degrades to the fixed fallback result.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// External diagram render engine.
    pub renderer: Arc<dyn RenderEngine>,
    /// Directory for locally saved diagram payloads.
    pub save_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, renderer: Arc<dyn RenderEngine>, save_dir: PathBuf) -> Self {
        Self { llm, renderer, save_dir }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
