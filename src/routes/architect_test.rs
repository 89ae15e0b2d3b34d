//! Tests for the generate-architecture handler.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;

use super::*;
use crate::services::architect::FALLBACK_RESULT;
use crate::state::test_helpers::{FailingLlm, MockLlm, test_app_state};

const RESPONSE_MARKDOWN: &str = "### Architecture Option 1: Foo\n\
Some summary line.\n\
```mermaid\n\
graph TD;\n\
A-->B;\n\
```\n\
Pros: fast\n\
Cons: costly\n\
### Architecture Option 2: Bar\n\
Other text.";

fn body(description: &str, constraints: &str) -> Json<GenerateArchitectureBody> {
    Json(GenerateArchitectureBody {
        system_description: description.to_owned(),
        constraints: constraints.to_owned(),
    })
}

#[tokio::test]
async fn returns_raw_result_and_parsed_options() {
    let state = test_app_state(Some(Arc::new(MockLlm { reply: RESPONSE_MARKDOWN.into() })));
    let Json(response) =
        generate_architecture(State(state), body("photo app", "low cost")).await;

    assert_eq!(response.result, RESPONSE_MARKDOWN);
    assert_eq!(response.options.len(), 2);
    assert_eq!(response.options[0].pros, "fast");
    assert_eq!(response.options[0].cons, "costly");
    assert_eq!(response.options[0].diagram, "graph TD;\nA-->B;");
    assert!(response.options[1].summary.contains("Other text."));
}

#[tokio::test]
async fn generator_failure_yields_fallback_and_no_options() {
    let state = test_app_state(Some(Arc::new(FailingLlm)));
    let Json(response) = generate_architecture(State(state), body("desc", "c")).await;

    assert_eq!(response.result, FALLBACK_RESULT);
    assert!(response.options.is_empty());
}

#[tokio::test]
async fn unconfigured_generator_yields_fallback() {
    let state = test_app_state(None);
    let Json(response) = generate_architecture(State(state), body("desc", "c")).await;

    assert_eq!(response.result, FALLBACK_RESULT);
    assert!(response.options.is_empty());
}

#[tokio::test]
async fn options_are_capped_at_six() {
    let mut markdown = String::new();
    for i in 1..=9 {
        markdown.push_str(&format!("## Architecture Option {i}: D{i}\nBody {i}\n"));
    }
    let state = test_app_state(Some(Arc::new(MockLlm { reply: markdown })));
    let Json(response) = generate_architecture(State(state), body("desc", "c")).await;
    assert_eq!(response.options.len(), 6);
}
