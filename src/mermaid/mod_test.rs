//! Tests for diagram normalization, validation, and the rendering adapter.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::engine::{EngineError, RenderEngine};
use super::{RenderOutcome, looks_like_diagram, normalize, render_diagram};
use crate::state::test_helpers::{FailingEngine, MockEngine};

// =============================================================================
// NORMALIZE
// =============================================================================

#[test]
fn normalize_strips_blockquote_markers() {
    assert_eq!(normalize("> graph TD;\n> A-->B;"), "graph TD;\nA-->B;");
}

#[test]
fn normalize_trims_surrounding_whitespace() {
    assert_eq!(normalize("\n  graph TD; A;\n"), "graph TD; A;");
}

#[test]
fn normalize_leaves_plain_lines_alone() {
    assert_eq!(normalize("graph TD;\nA-->B;"), "graph TD;\nA-->B;");
}

// =============================================================================
// VALIDATOR
// =============================================================================

#[test]
fn validator_accepts_graph_header() {
    assert!(looks_like_diagram("graph TD; A-->B;"));
}

#[test]
fn validator_rejects_prose_mentioning_graph() {
    assert!(!looks_like_diagram("This system uses graph theory."));
}

#[test]
fn validator_accepts_blockquoted_diagram() {
    assert!(looks_like_diagram("> graph TD; A-->B;"));
}

#[test]
fn validator_requires_uppercase_direction_and_semicolon() {
    assert!(!looks_like_diagram("graph td; A-->B;"));
    assert!(!looks_like_diagram("graph TD A-->B;"));
    assert!(!looks_like_diagram("graph ;"));
    assert!(!looks_like_diagram(""));
}

#[test]
fn validator_rejects_other_diagram_dialects() {
    // Narrow by design: unusual dialects are skipped, not rendered.
    assert!(!looks_like_diagram("sequenceDiagram\nA->>B: hi"));
    assert!(!looks_like_diagram("flowchart TD; A-->B;"));
}

// =============================================================================
// RENDERING ADAPTER
// =============================================================================

/// Engine wrapper that counts invocations, to prove the validator gates
/// the engine call.
struct CountingEngine {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl RenderEngine for CountingEngine {
    async fn render(&self, element_id: &str, _source: &str) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("<svg id=\"{element_id}\"></svg>"))
    }
}

#[tokio::test]
async fn adapter_renders_valid_source() {
    let outcome = render_diagram(&MockEngine, "graph TD; A-->B;").await;
    let RenderOutcome::Rendered { svg } = outcome else {
        panic!("expected Rendered outcome");
    };
    assert!(svg.contains("<svg"));
    assert!(svg.contains("diagram-"));
}

#[tokio::test]
async fn adapter_skips_prose_without_calling_engine() {
    let engine = CountingEngine { calls: AtomicUsize::new(0) };
    let outcome = render_diagram(&engine, "Just a paragraph of prose.").await;
    assert_eq!(outcome, RenderOutcome::Skipped);
    assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn adapter_converts_engine_failure_to_skip() {
    let outcome = render_diagram(&FailingEngine, "graph TD; A-->B;").await;
    assert_eq!(outcome, RenderOutcome::Skipped);
}

#[tokio::test]
async fn adapter_normalizes_before_rendering() {
    let outcome = render_diagram(&MockEngine, "> graph TD;\n> A-->B;").await;
    assert!(matches!(outcome, RenderOutcome::Rendered { .. }));
}

#[tokio::test]
async fn adapter_uses_fresh_element_ids() {
    let first = render_diagram(&MockEngine, "graph TD; A;").await;
    let second = render_diagram(&MockEngine, "graph TD; A;").await;
    let (RenderOutcome::Rendered { svg: a }, RenderOutcome::Rendered { svg: b }) = (first, second)
    else {
        panic!("expected both renders to succeed");
    };
    assert_ne!(a, b);
}
