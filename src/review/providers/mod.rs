//! Generative-text providers.

pub mod gemini;
pub mod mistral;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, ReviewError};

pub use gemini::GeminiProvider;
pub use mistral::MistralProvider;

/// Sampling temperature shared by both providers.
pub const TEMPERATURE: f32 = 0.7;

/// Output length cap shared by both providers.
pub const MAX_OUTPUT_TOKENS: u32 = 2000;

/// A service that turns a prompt into review text.
#[async_trait]
pub trait ReviewProvider: Send + Sync {
    /// Display name, used as the review's provider label.
    fn name(&self) -> &str;

    /// Generate review text for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, ReviewError>;
}

/// Providers with a configured key, in fallback order: Gemini, then Mistral.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be created.
pub fn from_config(config: &Config) -> Result<Vec<Arc<dyn ReviewProvider>>, Error> {
    let mut providers: Vec<Arc<dyn ReviewProvider>> = Vec::new();

    if let Some(key) = &config.gemini_api_key {
        providers.push(Arc::new(GeminiProvider::new(
            key,
            &config.gemini_model,
            config.http_timeout,
        )?));
    }
    if let Some(key) = &config.mistral_api_key {
        providers.push(Arc::new(MistralProvider::new(
            key,
            &config.mistral_model,
            config.http_timeout,
        )?));
    }

    Ok(providers)
}

/// Pull a human-readable message out of a provider error body.
///
/// Handles `{"error": {"message", "status"}}` (Google) and
/// `{"message"}` / `{"detail"}` (Mistral).
pub(crate) fn error_message(body: &Value, raw: &str) -> String {
    let nested = body.get("error");
    let message = nested
        .and_then(|e| e.get("message"))
        .or_else(|| body.get("message"))
        .or_else(|| body.get("detail"))
        .and_then(Value::as_str);

    match (message, nested.and_then(|e| e.get("status")).and_then(Value::as_str)) {
        (Some(message), Some(status)) => format!("{message} [{status}]"),
        (Some(message), None) => message.to_string(),
        (None, _) if !raw.trim().is_empty() => raw.trim().to_string(),
        (None, _) => "no error details".to_string(),
    }
}
