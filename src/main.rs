mod extract;
mod llm;
mod mermaid;
mod routes;
mod services;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .expect("invalid PORT");

    // Generation client is non-fatal: without it, every request resolves
    // to the fixed fallback result and an empty options list.
    let llm: Option<Arc<dyn llm::LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "generation client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "generation client not configured — using fallback results");
            None
        }
    };

    let renderer = mermaid::engine::HttpRenderEngine::from_env().expect("render engine init failed");

    let save_dir = std::env::var("SAVE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./saved-diagrams"));

    let state = state::AppState::new(llm, Arc::new(renderer), save_dir);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "archgen listening");
    axum::serve(listener, app).await.expect("server failed");
}
