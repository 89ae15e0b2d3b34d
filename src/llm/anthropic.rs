//! Anthropic Messages API client. Thin HTTP wrapper for `/v1/messages`;
//! pure parsing in `parse_response` for testability.

use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::LlmError;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key })
    }

    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the response holds
    /// no text.
    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        user: &str,
    ) -> Result<String, LlmError> {
        let body = ApiRequest {
            model,
            max_tokens,
            system,
            messages: &[ApiMessage { role: "user", content: user }],
        };

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ApiMessage<'a>],
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    content: Vec<ApiContentBlock>,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum ApiContentBlock {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(other)]
    Unknown,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let parts: Vec<&str> = api
        .content
        .iter()
        .filter_map(|block| match block {
            ApiContentBlock::Text { text } => Some(text.as_str()),
            ApiContentBlock::Unknown => None,
        })
        .collect();

    let text = parts.join("\n");
    if text.trim().is_empty() {
        return Err(LlmError::ApiParse("messages: response contained no text blocks".to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_text_block() {
        let json = serde_json::json!({
            "content": [{ "type": "text", "text": "### Architecture Option 1: Foo" }],
            "model": "claude-sonnet-4-5-20250929",
            "stop_reason": "end_turn"
        })
        .to_string();
        let text = parse_response(&json).unwrap();
        assert_eq!(text, "### Architecture Option 1: Foo");
    }

    #[test]
    fn parse_joins_text_blocks_and_skips_unknown() {
        let json = serde_json::json!({
            "content": [
                { "type": "thinking", "thinking": "..." },
                { "type": "text", "text": "first" },
                { "type": "text", "text": "second" }
            ]
        })
        .to_string();
        assert_eq!(parse_response(&json).unwrap(), "first\nsecond");
    }

    #[test]
    fn parse_rejects_textless_response() {
        let json = serde_json::json!({ "content": [] }).to_string();
        assert!(parse_response(&json).is_err());
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse_response("not json").is_err());
    }
}
