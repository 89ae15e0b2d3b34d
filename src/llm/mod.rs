//! Generation backend — multi-provider client for the architecture
//! generator.
//!
//! DESIGN
//! ======
//! The generator is an external collaborator reached over HTTP. The
//! `LlmClient` enum dispatches to Anthropic or OpenAI based on
//! `LLM_PROVIDER`; everything above it depends only on the [`LlmChat`]
//! trait so tests can substitute a mock.

pub mod anthropic;
pub mod config;
pub mod openai;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use types::LlmChat;
use types::LlmError;

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete generation client that dispatches to either Anthropic or
/// OpenAI. Configured from environment variables by
/// [`LlmClient::from_env`].
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
}

enum LlmProvider {
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// Build a generation client from environment variables (see
    /// [`LlmConfig::from_env`] for the variable set).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build a generation client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let model = config.model.clone();
        let inner = match config.provider {
            LlmProviderKind::Anthropic => LlmProvider::Anthropic(anthropic::AnthropicClient::new(
                config.api_key,
                config.timeouts,
            )?),
            LlmProviderKind::OpenAi => LlmProvider::OpenAi(openai::OpenAiClient::new(
                config.api_key,
                config.openai_base_url,
                config.timeouts,
            )?),
        };
        Ok(Self { inner, model })
    }

    /// Return the configured model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, max_tokens: u32, system: &str, user: &str) -> Result<String, LlmError> {
        match &self.inner {
            LlmProvider::Anthropic(c) => c.chat(&self.model, max_tokens, system, user).await,
            LlmProvider::OpenAi(c) => c.chat(&self.model, max_tokens, system, user).await,
        }
    }
}
