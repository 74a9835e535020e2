//! Error types for octoscope.
//!
//! `GitHubError` mirrors the failure categories the GitHub REST API reports,
//! `ReviewError` covers the generative-text providers, and `Error` is the
//! crate-wide error that wraps both transport and API failures.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Main error type for octoscope.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error (connection refused, timeout, unreadable body)
    #[error("{0}")]
    Http(String),

    /// Response body did not match the expected JSON shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed user input, such as a repository name without an owner
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// GitHub API error
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// An operation failed; `context` names what was being attempted.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with the name of the operation that failed.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any `Context` layers.
    #[must_use]
    pub fn root(&self) -> &Error {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// The GitHub API error underneath any context, if there is one.
    #[must_use]
    pub fn github(&self) -> Option<&GitHubError> {
        match self.root() {
            Self::GitHub(e) => Some(e),
            _ => None,
        }
    }

    /// Check whether this failure was caused by GitHub's rate limit.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.github(), Some(GitHubError::RateLimited { .. }))
    }

    /// Check whether GitHub reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.github(), Some(GitHubError::NotFound { .. }))
    }
}

/// Typed errors for GitHub REST API responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitHubError {
    /// Bad credentials (401).
    #[error("{message}")]
    Unauthorized { message: String },

    /// Access denied for a reason other than rate limiting (403).
    #[error("{message}")]
    Forbidden { message: String },

    /// Resource does not exist (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Primary or secondary rate limit hit (403/429).
    #[error("{}", rate_limited_display(.reset_at))]
    RateLimited {
        message: String,
        reset_at: Option<DateTime<Utc>>,
    },

    /// Rejected request, e.g. an invalid search query (400/422).
    #[error("{message}")]
    Validation { status: u16, message: String },

    /// Server errors (5xx).
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl GitHubError {
    /// Get the upstream error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::RateLimited { message, .. }
            | Self::Validation { message, .. }
            | Self::Server { message, .. } => message,
        }
    }

    /// Get the rate limit reset time, if this is a rate limit error that carried one.
    #[must_use]
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::RateLimited { reset_at, .. } => *reset_at,
            _ => None,
        }
    }

    /// Check if this error is retryable.
    ///
    /// Rate limits are excluded: GitHub's window is far longer than any
    /// sensible backoff.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

#[allow(clippy::ref_option)]
fn rate_limited_display(reset_at: &Option<DateTime<Utc>>) -> String {
    rate_limit_message(*reset_at, Utc::now())
}

/// Build the user-facing rate limit message.
pub fn rate_limit_message(reset_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let reset = reset_at
        .map(|at| {
            let seconds = (at - now).num_seconds().max(0);
            let minutes = (seconds + 59) / 60;
            format!("Rate limit resets in {minutes} minutes. ")
        })
        .unwrap_or_default();

    format!(
        "GitHub API rate limit exceeded. {reset}Consider adding a GitHub personal access token to increase your rate limit."
    )
}

/// Errors raised by generative-text providers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// The provider has no API key configured.
    #[error("{provider} API key is not configured")]
    MissingApiKey { provider: String },

    /// The request never produced a response.
    #[error("Failed to reach {provider}: {message}")]
    Http { provider: String, message: String },

    /// The provider answered with an error status.
    #[error("{provider} API error ({status}): {message}")]
    Api {
        provider: String,
        status: u16,
        message: String,
    },

    /// The provider answered 2xx but the payload had no usable text.
    #[error("Invalid response structure from {provider} API")]
    InvalidResponse { provider: String },
}

impl ReviewError {
    /// Name of the provider that failed.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::MissingApiKey { provider }
            | Self::Http { provider, .. }
            | Self::Api { provider, .. }
            | Self::InvalidResponse { provider } => provider,
        }
    }

    /// Short explanation suitable for showing next to a fallback review.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Api { status: 429, .. } => {
                "API quota exceeded. Try again later or switch to demo mode."
            }
            Self::Api { message, .. } if message.contains("RESOURCE_EXHAUSTED") || message.contains("QUOTA_EXCEEDED") => {
                "API quota exceeded. Try again later or switch to demo mode."
            }
            Self::MissingApiKey { .. } | Self::Api { status: 401 | 403, .. } => {
                "Invalid API key. Check your configuration."
            }
            Self::Api { message, .. } if message.contains("API_KEY_INVALID") || message.contains("INVALID_API_KEY") => {
                "Invalid API key. Check your configuration."
            }
            Self::Http { .. } => "Network error connecting to AI service. Using demo mode instead.",
            Self::Api { .. } | Self::InvalidResponse { .. } => {
                "Failed to generate AI review. Using demo mode."
            }
        }
    }
}
