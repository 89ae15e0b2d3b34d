//! External render engine — the narrow contract to the third-party diagram
//! renderer, plus the HTTP client that implements it.
//!
//! The engine is consumed only through [`RenderEngine`]; the adapter in
//! `render.rs` never sees transport details and tests swap in a mock.

use std::time::Duration;

use async_trait::async_trait;

const DEFAULT_RENDERER_BASE_URL: &str = "https://kroki.io";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced by render engine calls. All of them are converted to a
/// skip by the adapter; none ever reach the user.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The HTTP request to the render service failed.
    #[error("render request failed: {0}")]
    Request(String),

    /// The render service returned a non-success HTTP status.
    #[error("render service error: status {status}")]
    Service { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Narrow contract to the external renderer: diagram source in, SVG markup
/// out. `element_id` is stamped onto the produced markup so several
/// diagrams can coexist in one document.
#[async_trait]
pub trait RenderEngine: Send + Sync {
    /// Render `source` to SVG markup.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the request fails or the service
    /// rejects the source.
    async fn render(&self, element_id: &str, source: &str) -> Result<String, EngineError>;
}

/// HTTP client against a Kroki-compatible render service
/// (`POST {base}/mermaid/svg` with the source as the request body).
pub struct HttpRenderEngine {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRenderEngine {
    /// Build the engine client from `RENDERER_BASE_URL` (default: the
    /// public Kroki instance).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_env() -> Result<Self, EngineError> {
        let base_url = std::env::var("RENDERER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_RENDERER_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: String) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| EngineError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }
}

#[async_trait]
impl RenderEngine for HttpRenderEngine {
    async fn render(&self, element_id: &str, source: &str) -> Result<String, EngineError> {
        let url = format!("{}/mermaid/svg", self.base_url);
        let response = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(source.to_owned())
            .send()
            .await
            .map_err(|e| EngineError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| EngineError::Request(e.to_string()))?;

        if status != 200 {
            return Err(EngineError::Service { status, body });
        }

        Ok(tag_with_id(&body, element_id))
    }
}

/// Stamp the caller's element id onto the opening `<svg>` tag. Left as-is
/// when the markup has no such tag.
fn tag_with_id(svg: &str, element_id: &str) -> String {
    match svg.find("<svg") {
        Some(at) => {
            let tail = &svg[at + "<svg".len()..];
            format!("{}<svg id=\"{element_id}\"{tail}", &svg[..at])
        }
        None => svg.to_owned(),
    }
}
