//! Runtime configuration read from the environment.

use std::env;
use std::time::Duration;

use crate::client::DEFAULT_BASE_URL;

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default Mistral model.
pub const DEFAULT_MISTRAL_MODEL: &str = "mistral-large-latest";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token for GitHub (raises the rate limit)
    pub github_token: Option<String>,
    /// GitHub REST API base URL
    pub github_api_base: String,
    /// Gemini API key; enables the Gemini provider
    pub gemini_api_key: Option<String>,
    /// Gemini model identifier
    pub gemini_model: String,
    /// Mistral API key; enables the Mistral provider
    pub mistral_api_key: Option<String>,
    /// Mistral model identifier
    pub mistral_model: String,
    /// Always answer reviews from templates
    pub demo_mode: bool,
    /// Per-request timeout for every outbound call
    pub http_timeout: Duration,
    /// Minimum gap between two AI provider requests
    pub ai_request_delay: Duration,
    /// Simulated latency for template reviews in demo mode
    pub demo_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            github_api_base: DEFAULT_BASE_URL.to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            mistral_api_key: None,
            mistral_model: DEFAULT_MISTRAL_MODEL.to_string(),
            demo_mode: false,
            http_timeout: Duration::from_secs(30),
            ai_request_delay: Duration::from_millis(1000),
            demo_delay: Duration::from_millis(1500),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let demo_mode = match get("DEMO_MODE") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidValue("DEMO_MODE"))?,
            None => defaults.demo_mode,
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse()
                    .map_err(|_| ConfigError::InvalidValue("HTTP_TIMEOUT_SECS"))?,
            ),
            None => defaults.http_timeout,
        };

        let ai_request_delay = match get("AI_REQUEST_DELAY_MS") {
            Some(v) => Duration::from_millis(
                v.parse()
                    .map_err(|_| ConfigError::InvalidValue("AI_REQUEST_DELAY_MS"))?,
            ),
            None => defaults.ai_request_delay,
        };

        let demo_delay = match get("DEMO_DELAY_MS") {
            Some(v) => Duration::from_millis(
                v.parse()
                    .map_err(|_| ConfigError::InvalidValue("DEMO_DELAY_MS"))?,
            ),
            None => defaults.demo_delay,
        };

        Ok(Self {
            github_token: get("GITHUB_TOKEN"),
            github_api_base: get("GITHUB_API_BASE").unwrap_or(defaults.github_api_base),
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            mistral_api_key: get("MISTRAL_API_KEY"),
            mistral_model: get("MISTRAL_MODEL").unwrap_or(defaults.mistral_model),
            demo_mode,
            http_timeout,
            ai_request_delay,
            demo_delay,
        })
    }

    /// Whether at least one AI provider has a key.
    #[must_use]
    pub fn has_ai_provider(&self) -> bool {
        self.gemini_api_key.is_some() || self.mistral_api_key.is_some()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.github_api_base, "https://api.github.com");
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.mistral_model, "mistral-large-latest");
        assert!(!config.demo_mode);
        assert!(!config.has_ai_provider());
        assert_eq!(config.ai_request_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[
            ("GITHUB_TOKEN", "  "),
            ("GEMINI_API_KEY", ""),
            ("MISTRAL_API_KEY", "mk-123"),
        ]))
        .unwrap();

        assert_eq!(config.github_token, None);
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.mistral_api_key.as_deref(), Some("mk-123"));
        assert!(config.has_ai_provider());
    }

    #[test]
    fn test_demo_mode_parsing() {
        let on = Config::from_lookup(lookup(&[("DEMO_MODE", "true")])).unwrap();
        assert!(on.demo_mode);

        let off = Config::from_lookup(lookup(&[("DEMO_MODE", "0")])).unwrap();
        assert!(!off.demo_mode);

        let bad = Config::from_lookup(lookup(&[("DEMO_MODE", "maybe")]));
        assert!(matches!(bad, Err(ConfigError::InvalidValue("DEMO_MODE"))));
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let result = Config::from_lookup(lookup(&[("HTTP_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue("HTTP_TIMEOUT_SECS"))));
    }
}
