//! HTTP transport for the GitHub REST API.
//!
//! Handles default headers, automatic retry of transient failures, error
//! translation into [`GitHubError`], and tracking of the rate limit headers
//! GitHub attaches to every response.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use rand::thread_rng;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, GitHubError};

/// Media type requested from GitHub.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Configuration for automatic retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Base backoff factor for exponential backoff
    pub backoff_factor: f64,
    /// Status codes that trigger retry
    pub retry_on: Vec<u16>,
    /// Maximum backoff time in seconds
    pub max_backoff: f64,
    /// Jitter factor (0.1 = ±10%)
    pub jitter: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff_factor: 2.0,
            retry_on: vec![500, 502, 503],
            max_backoff: 30.0,
            jitter: 0.1,
        }
    }
}

impl RetryConfig {
    /// A configuration that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

/// Snapshot of the `x-ratelimit-*` headers from the most recent response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    /// Requests allowed per window
    pub limit: Option<u32>,
    /// Requests left in the current window
    pub remaining: Option<u32>,
    /// Requests consumed in the current window
    pub used: Option<u32>,
    /// When the window resets
    pub reset_at: Option<DateTime<Utc>>,
    /// Rate limit bucket, e.g. "core" or "search"
    pub resource: Option<String>,
}

impl RateLimitStatus {
    /// Read the rate limit headers; `None` when GitHub sent none.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let status = Self {
            limit: header_u64(headers, "x-ratelimit-limit").and_then(|v| u32::try_from(v).ok()),
            remaining: header_u64(headers, "x-ratelimit-remaining")
                .and_then(|v| u32::try_from(v).ok()),
            used: header_u64(headers, "x-ratelimit-used").and_then(|v| u32::try_from(v).ok()),
            reset_at: header_u64(headers, "x-ratelimit-reset").and_then(epoch_to_datetime),
            resource: headers
                .get("x-ratelimit-resource")
                .and_then(|v| v.to_str().ok())
                .map(String::from),
        };

        if status == Self::default() {
            None
        } else {
            Some(status)
        }
    }

    /// True when no requests remain in the current window.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

/// Rate limit overview from `GET /rate_limit`.
#[derive(Debug, Clone, Deserialize)]
struct RateLimitResponse {
    rate: RateLimitRate,
}

#[derive(Debug, Clone, Deserialize)]
struct RateLimitRate {
    limit: u32,
    remaining: u32,
    used: Option<u32>,
    reset: u64,
    resource: Option<String>,
}

/// HTTP transport layer for GitHub with retry logic.
///
/// Handles:
/// - GitHub media type, user agent and token headers
/// - Exponential backoff with jitter for transient server failures
/// - Error response parsing into typed errors
/// - Rate limit header tracking
pub struct HttpTransport {
    base_url: String,
    client: Client,
    retry_config: RetryConfig,
    rate_limit: Mutex<Option<RateLimitStatus>>,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (e.g., "<https://api.github.com>")
    /// * `token` - Optional personal access token
    /// * `timeout` - Request timeout
    /// * `retry_config` - Configuration for retry behavior
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be created.
    pub fn new(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
        retry_config: Option<RetryConfig>,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("octoscope/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("token {token}"))
                .map_err(|_| Error::Configuration("GitHub token contains invalid characters".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry_config: retry_config.unwrap_or_default(),
            rate_limit: Mutex::new(None),
        })
    }

    /// GET a JSON resource with automatic retry.
    ///
    /// # Arguments
    ///
    /// * `segments` - Path segments, each percent-encoded individually
    ///   (e.g. `["users", login, "repos"]`)
    /// * `params` - Query parameters
    ///
    /// # Errors
    ///
    /// Returns a `GitHubError` on API errors and `Error::Http` on transport
    /// failures.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url_for(segments)?;

        self.execute_with_retry(|| {
            let request = self.client.get(url.clone()).query(params);
            let target = url.clone();
            async move {
                debug!(url = %target, "GitHub request");
                request.send().await.map_err(|e| Error::Http(e.to_string()))
            }
        })
        .await
    }

    /// Query `GET /rate_limit`. This endpoint does not count against the limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fetch_rate_limit(&self) -> Result<RateLimitStatus, Error> {
        let response: RateLimitResponse = self.get_json(&["rate_limit"], &[]).await?;
        let rate = response.rate;

        Ok(RateLimitStatus {
            limit: Some(rate.limit),
            remaining: Some(rate.remaining),
            used: rate.used,
            reset_at: epoch_to_datetime(rate.reset),
            resource: rate.resource,
        })
    }

    /// Build the full URL for a list of path segments.
    fn url_for(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::Configuration(format!("Invalid GitHub base URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| Error::Configuration(format!("GitHub base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Execute a request with automatic retry on retryable errors.
    async fn execute_with_retry<F, Fut, T>(&self, request_fn: F) -> Result<T, Error>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<Response, Error>>,
        T: DeserializeOwned,
    {
        let mut attempt = 0;

        loop {
            match request_fn().await {
                Ok(response) => {
                    let status = response.status();
                    self.record_rate_limit(response.headers());

                    if status.is_success() {
                        let body = response
                            .bytes()
                            .await
                            .map_err(|e| Error::Http(format!("Failed to read response: {e}")))?;
                        return Ok(serde_json::from_slice::<T>(&body)?);
                    }

                    let error = parse_error_response(response).await;

                    if !self.should_retry(status.as_u16(), attempt) {
                        return Err(error);
                    }

                    let wait_time = self.get_backoff_time(attempt);
                    warn!(status = status.as_u16(), attempt, wait_time, "retrying GitHub request");
                    tokio::time::sleep(Duration::from_secs_f64(wait_time)).await;
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt >= self.retry_config.max_retries {
                        return Err(e);
                    }

                    let wait_time = self.get_backoff_time(attempt);
                    warn!(error = %e, attempt, wait_time, "retrying GitHub request after network error");
                    tokio::time::sleep(Duration::from_secs_f64(wait_time)).await;
                }
            }

            attempt += 1;
        }
    }

    /// Determine if a request should be retried.
    fn should_retry(&self, status_code: u16, attempt: u32) -> bool {
        if attempt >= self.retry_config.max_retries {
            return false;
        }

        self.retry_config.retry_on.contains(&status_code)
    }

    /// Calculate backoff time for retry using exponential backoff with jitter.
    fn get_backoff_time(&self, attempt: u32) -> f64 {
        let base_wait = self
            .retry_config
            .backoff_factor
            .powi(i32::try_from(attempt).unwrap_or(i32::MAX));

        let wait_time = if self.retry_config.jitter > 0.0 {
            let jitter_range = base_wait * self.retry_config.jitter;
            let mut rng = thread_rng();
            base_wait + rng.gen_range(-jitter_range..jitter_range)
        } else {
            base_wait
        };

        wait_time.min(self.retry_config.max_backoff)
    }

    fn record_rate_limit(&self, headers: &HeaderMap) {
        if let Some(status) = RateLimitStatus::from_headers(headers) {
            if status.remaining.is_some_and(|r| r < 10) {
                debug!(remaining = ?status.remaining, reset_at = ?status.reset_at, "GitHub rate limit running low");
            }
            *self.rate_limit.lock().unwrap_or_else(|e| e.into_inner()) = Some(status);
        }
    }

    /// Rate limit headers from the most recent response, if any.
    #[must_use]
    pub fn rate_limit_status(&self) -> Option<RateLimitStatus> {
        self.rate_limit
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Parse an error response into a typed error.
async fn parse_error_response(response: Response) -> Error {
    let status = response.status();
    let headers = response.headers().clone();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    Error::GitHub(classify_error(status, &headers, &body, Utc::now()))
}

/// Translate a non-success GitHub response into a [`GitHubError`].
///
/// A 403 counts as a rate limit when GitHub reports no remaining requests or
/// its message mentions the rate limit; 429 is always a rate limit.
#[must_use]
pub fn classify_error(
    status: StatusCode,
    headers: &HeaderMap,
    body: &Value,
    now: DateTime<Utc>,
) -> GitHubError {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map_or_else(|| format!("HTTP {}", status.as_u16()), String::from);

    let remaining = header_u64(headers, "x-ratelimit-remaining");
    let mentions_limit = message.to_lowercase().contains("rate limit");

    match status {
        StatusCode::TOO_MANY_REQUESTS => GitHubError::RateLimited {
            message,
            reset_at: rate_limit_reset(headers, now),
        },
        StatusCode::FORBIDDEN if remaining == Some(0) || mentions_limit => GitHubError::RateLimited {
            message,
            reset_at: rate_limit_reset(headers, now),
        },
        StatusCode::FORBIDDEN => GitHubError::Forbidden { message },
        StatusCode::UNAUTHORIZED => GitHubError::Unauthorized { message },
        StatusCode::NOT_FOUND => GitHubError::NotFound { message },
        s if s.is_server_error() => GitHubError::Server {
            status: s.as_u16(),
            message,
        },
        s => GitHubError::Validation {
            status: s.as_u16(),
            message,
        },
    }
}

/// Reset time from `x-ratelimit-reset`, else `now + retry-after`.
fn rate_limit_reset(headers: &HeaderMap, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    header_u64(headers, "x-ratelimit-reset")
        .and_then(epoch_to_datetime)
        .or_else(|| {
            header_u64(headers, "retry-after")
                .and_then(|secs| i64::try_from(secs).ok())
                .map(|secs| now + chrono::Duration::seconds(secs))
        })
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

fn epoch_to_datetime(secs: u64) -> Option<DateTime<Utc>> {
    i64::try_from(secs)
        .ok()
        .and_then(|s| Utc.timestamp_opt(s, 0).single())
}
