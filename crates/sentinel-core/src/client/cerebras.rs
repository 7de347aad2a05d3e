//! Cerebras chat-completions client
//!
//! The one backend whose transport mechanically enforces the verdict
//! shape: every request carries a strict JSON-schema response format, in
//! addition to the textual instructions embedded in the prompt. Both
//! enforcement paths still feed the same strict decoder downstream.

use super::ModelClient;
use crate::config::Settings;
use crate::error::{GuardError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

const API_URL: &str = "https://api.cerebras.ai/v1/chat/completions";
const MODEL: &str = "qwen-3-coder-480b";
const RESPONSE_SCHEMA_NAME: &str = "tdd_validation_response";

/// Client for the Cerebras chat-completions API.
#[derive(Debug)]
pub struct CerebrasApi {
    http: reqwest::Client,
    api_key: String,
}

impl CerebrasApi {
    /// Create a client from resolved settings.
    ///
    /// Fails fast when the credential is absent so that direct
    /// construction surfaces misconfiguration immediately; the backend
    /// selector catches this and falls back to the CLI delegate instead.
    pub fn new(settings: &Settings) -> Result<Self> {
        let api_key = settings
            .cerebras_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GuardError::Config(
                    "CEREBRAS_API_KEY is required for the cerebras model client".to_string(),
                )
            })?;

        tracing::debug!("using cerebras api with {MODEL}");
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
        })
    }

    /// JSON schema of the verdict object, as the vendor expects it
    fn response_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "decision": {
                    "anyOf": [
                        { "type": "string", "enum": ["block", "approve"] },
                        { "type": "null" },
                    ],
                    "description":
                        "The validation decision: block for violations, null for approval or insufficient information",
                },
                "reason": {
                    "type": "string",
                    "description": "Clear explanation with actionable next steps",
                },
            },
            "required": ["decision", "reason"],
            "additionalProperties": false,
        })
    }

    /// Append inline format instructions to the composed prompt.
    ///
    /// The schema constraint alone does not tell the model what the keys
    /// mean, so the instructions ride along in the message as well.
    fn enhance_prompt(prompt: &str) -> String {
        format!(
            r#"{prompt}

IMPORTANT: You MUST respond with a valid JSON object matching this exact structure:
{{
  "decision": "block" | "approve" | null,
  "reason": "Clear explanation with actionable next steps"
}}

Use "block" for TDD violations, null for approval or insufficient information."#
        )
    }

    /// Single-turn request body: enhanced prompt, fixed sampling
    /// temperature for varied but structured output, no output-size cap,
    /// strict schema-constrained response format.
    fn request_body(prompt: &str) -> Value {
        json!({
            "model": MODEL,
            "messages": [
                {
                    "role": "user",
                    "content": Self::enhance_prompt(prompt),
                }
            ],
            "temperature": 0.7,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": RESPONSE_SCHEMA_NAME,
                    "strict": true,
                    "schema": Self::response_schema(),
                },
            },
        })
    }
}

#[async_trait]
impl ModelClient for CerebrasApi {
    async fn ask(&self, prompt: &str) -> Result<String> {
        let response = self
            .http
            .post(API_URL)
            .bearer_auth(&self.api_key)
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

        let completion: ChatCompletionsResponse = response.json().await?;
        extract_content(completion)
    }

    fn name(&self) -> &'static str {
        "cerebras"
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Pull the assistant text out of a chat-completions response, with
/// distinct failures for "no choices" and "choice without content".
fn extract_content(response: ChatCompletionsResponse) -> Result<String> {
    let first = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GuardError::EmptyResponse("no choices returned from cerebras api".to_string()))?;

    first
        .message
        .and_then(|message| message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| {
            GuardError::EmptyResponse("no content in cerebras api response".to_string())
        })
}
