//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI is a separate client served from another origin, so every
//! endpoint here is JSON over permissive CORS. Each user-triggered action
//! (generate, render a card's diagram, save, upload) is an independent
//! request with no shared mutable state between concurrent invocations.

pub mod architect;
pub mod diagrams;
pub mod upload;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/generate-architecture", post(architect::generate_architecture))
        .route("/render-diagram", post(diagrams::render_diagram))
        .route("/save-diagram", post(diagrams::save_diagram))
        .route("/upload-file", post(upload::upload_file))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
