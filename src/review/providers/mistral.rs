//! Mistral chat-completions provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{error_message, ReviewProvider, MAX_OUTPUT_TOKENS, TEMPERATURE};
use crate::error::{Error, ReviewError};
use crate::review::prompts::SYSTEM_PROMPT;

/// Default Mistral API base URL.
pub const MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";

const PROVIDER: &str = "Mistral";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Subset of the chat-completions response we read.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` when the first choice is missing or empty.
    pub fn into_text(self) -> Result<String, ReviewError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ReviewError::InvalidResponse {
                provider: PROVIDER.to_string(),
            })
    }
}

/// Mistral review provider.
pub struct MistralProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl MistralProvider {
    /// Create a provider for `model` using `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: MISTRAL_BASE_URL.to_string(),
            client,
        })
    }

    /// Point the provider at a different API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[async_trait]
impl ReviewProvider for MistralProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn generate(&self, prompt: &str) -> Result<String, ReviewError> {
        if self.api_key.is_empty() {
            return Err(ReviewError::MissingApiKey {
                provider: PROVIDER.to_string(),
            });
        }

        debug!(model = %self.model, "requesting Mistral review");
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ReviewError::Http {
                provider: PROVIDER.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let body: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);
            return Err(ReviewError::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message: error_message(&body, &raw),
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|_| ReviewError::InvalidResponse {
            provider: PROVIDER.to_string(),
        })?;
        parsed.into_text()
    }
}
