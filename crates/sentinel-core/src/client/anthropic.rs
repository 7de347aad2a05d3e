//! Anthropic Messages API client

use super::ModelClient;
use crate::config::Settings;
use crate::error::{GuardError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-sonnet-4-20250514";
const MAX_TOKENS: u32 = 1024;

/// Client for the Anthropic Messages API.
///
/// Construction never fails: a missing credential surfaces as a call-time
/// authentication error from the vendor, which keeps the backend selector
/// total. Schema enforcement is textual only (the composed prompt embeds
/// the format instructions), so the strict decoder downstream is the sole
/// arbiter of what counts as a verdict.
pub struct AnthropicApi {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicApi {
    /// Create a client from resolved settings
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        tracing::debug!("using anthropic api with {MODEL}");
        Self {
            http: reqwest::Client::new(),
            api_key: settings.anthropic_api_key.clone().unwrap_or_default(),
        }
    }

    /// Single-turn request body: one user message, capped output size
    fn request_body(prompt: &str) -> Value {
        json!({
            "model": MODEL,
            "max_tokens": MAX_TOKENS,
            "messages": [
                {
                    "role": "user",
                    "content": prompt,
                }
            ],
        })
    }
}

#[async_trait]
impl ModelClient for AnthropicApi {
    async fn ask(&self, prompt: &str) -> Result<String> {
        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&Self::request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuardError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let message: MessagesResponse = response.json().await?;
        extract_text(message)
    }

    fn name(&self) -> &'static str {
        "anthropic_api"
    }
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Pull the first text block out of a messages response, failing loudly on
/// an empty content list or a non-text first block.
fn extract_text(response: MessagesResponse) -> Result<String> {
    let first = response
        .content
        .into_iter()
        .next()
        .ok_or_else(|| GuardError::EmptyResponse("no content in response".to_string()))?;

    first
        .text
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            GuardError::EmptyResponse("response content does not contain text".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelKind;

    fn settings_with_key(key: &str) -> Settings {
        Settings::default()
            .with_model_kind(ModelKind::AnthropicApi)
            .with_anthropic_api_key(key)
    }

    #[test]
    fn construction_keeps_configured_credential() {
        let client = AnthropicApi::new(&settings_with_key("test-api-key-123"));
        assert_eq!(client.api_key, "test-api-key-123");
    }

    #[test]
    fn construction_tolerates_missing_credential() {
        let client = AnthropicApi::new(&Settings::default());
        assert_eq!(client.api_key, "");
    }

    #[test]
    fn request_carries_single_user_message_with_literal_prompt() {
        let body = AnthropicApi::request_body("Does X violate TDD?");
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "Does X violate TDD?");
    }

    #[test]
    fn request_names_model_and_caps_output() {
        let body = AnthropicApi::request_body("prompt");
        assert_eq!(body["model"], "claude-sonnet-4-20250514");
        assert_eq!(body["max_tokens"], 1024);
    }

    #[test]
    fn extracts_first_text_block() {
        let response = MessagesResponse {
            content: vec![
                ContentBlock {
                    text: Some("first".to_string()),
                },
                ContentBlock {
                    text: Some("second".to_string()),
                },
            ],
        };
        assert_eq!(extract_text(response).unwrap(), "first");
    }

    #[test]
    fn empty_content_is_an_empty_response_error() {
        let response = MessagesResponse { content: vec![] };
        let err = extract_text(response).unwrap_err();
        assert!(matches!(err, GuardError::EmptyResponse(_)));
        assert!(err.to_string().contains("no content in response"));
    }

    #[test]
    fn textless_block_is_an_empty_response_error() {
        let response = MessagesResponse {
            content: vec![ContentBlock { text: None }],
        };
        let err = extract_text(response).unwrap_err();
        assert!(matches!(err, GuardError::EmptyResponse(_)));
        assert!(err.to_string().contains("does not contain text"));
    }
}
