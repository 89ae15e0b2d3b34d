//! Generation backend types — provider-neutral contract and errors.

use async_trait::async_trait;

/// Errors produced by generation client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be interpreted.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Provider-neutral async trait for the generation backend. The product
/// sends one system prompt and one user message per request and consumes
/// the assistant's markdown text, so the contract is exactly that narrow.
/// Enables mocking in tests.
#[async_trait]
pub trait LlmChat: Send + Sync {
    /// Send a single-turn generation request and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the response is
    /// malformed, or the provider returns no usable text.
    async fn chat(&self, max_tokens: u32, system: &str, user: &str) -> Result<String, LlmError>;
}
