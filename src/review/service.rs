//! Review orchestration: demo mode, provider fallback chain and throttling.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::providers::{self, ReviewProvider};
use super::throttle::RequestThrottle;
use super::{demo, prompts};
use crate::config::Config;
use crate::error::{Error, ReviewError};
use crate::types::{Repository, User};

/// Provider label for reviews produced in demo mode.
pub const DEMO_PROVIDER: &str = "Demo AI";

/// Provider label for template reviews produced because every provider failed.
pub const FALLBACK_PROVIDER: &str = "Demo AI (API Fallback)";

/// Notice attached to fallback reviews.
pub const FALLBACK_NOTICE: &str =
    "Using demo mode due to API connection issues. Configure API keys for full functionality.";

/// One provider's failed attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderFailure {
    pub provider: String,
    pub message: String,
    /// Short classification for display
    pub hint: &'static str,
}

impl From<&ReviewError> for ProviderFailure {
    fn from(error: &ReviewError) -> Self {
        Self {
            provider: error.provider().to_string(),
            message: error.to_string(),
            hint: error.user_message(),
        }
    }
}

/// A finished review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewResult {
    /// Who wrote the review: a provider name, `Demo AI`, or `Demo AI (API Fallback)`
    pub provider: String,
    /// Markdown review text
    pub review: String,
    pub timestamp: DateTime<Utc>,
    /// Set when the review is a fallback the user should know about
    pub notice: Option<String>,
    /// Providers that were tried and failed, in order
    pub failures: Vec<ProviderFailure>,
}

impl ReviewResult {
    /// True when the text came from a template rather than a provider.
    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.provider == DEMO_PROVIDER || self.provider == FALLBACK_PROVIDER
    }
}

/// What is being reviewed.
#[derive(Debug, Clone, Copy)]
pub enum ReviewSubject<'a> {
    Profile {
        user: &'a User,
        repositories: &'a [Repository],
    },
    Repository(&'a Repository),
}

impl ReviewSubject<'_> {
    fn prompt(&self) -> String {
        match self {
            Self::Profile { user, repositories } => prompts::profile_prompt(user, repositories),
            Self::Repository(repo) => prompts::repository_prompt(repo),
        }
    }

    fn template(&self, now: DateTime<Utc>) -> String {
        match self {
            Self::Profile { user, repositories } => demo::profile_review(user, repositories, now),
            Self::Repository(repo) => demo::repository_review(repo, now),
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Profile { user, .. } => user.login.clone(),
            Self::Repository(repo) => repo.full_name.clone(),
        }
    }
}

/// Produces reviews, trying each provider in order and falling back to
/// templates. Never fails: the worst case is a template review.
pub struct ReviewService {
    providers: Vec<Arc<dyn ReviewProvider>>,
    demo_mode: bool,
    throttle: RequestThrottle,
    demo_delay: Duration,
}

impl ReviewService {
    /// Create a review service.
    ///
    /// # Arguments
    ///
    /// * `providers` - Providers in fallback order
    /// * `demo_mode` - Skip providers and answer from templates
    /// * `request_delay` - Minimum gap between provider requests
    /// * `demo_delay` - Simulated latency for demo-mode reviews
    #[must_use]
    pub fn new(
        providers: Vec<Arc<dyn ReviewProvider>>,
        demo_mode: bool,
        request_delay: Duration,
        demo_delay: Duration,
    ) -> Self {
        Self {
            providers,
            demo_mode,
            throttle: RequestThrottle::new(request_delay),
            demo_delay,
        }
    }

    /// Build the service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a provider's HTTP client cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Ok(Self::new(
            providers::from_config(config)?,
            config.demo_mode,
            config.ai_request_delay,
            config.demo_delay,
        ))
    }

    /// Demo mode is on when requested or when no provider is configured.
    #[must_use]
    pub fn is_demo_mode(&self) -> bool {
        self.demo_mode || self.providers.is_empty()
    }

    /// Names of configured providers, in fallback order.
    #[must_use]
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Review a profile from the user and their repositories.
    pub async fn review_profile(&self, user: &User, repositories: &[Repository]) -> ReviewResult {
        self.review(ReviewSubject::Profile { user, repositories }).await
    }

    /// Review a single repository.
    pub async fn review_repository(&self, repository: &Repository) -> ReviewResult {
        self.review(ReviewSubject::Repository(repository)).await
    }

    /// Review any subject.
    pub async fn review(&self, subject: ReviewSubject<'_>) -> ReviewResult {
        if self.is_demo_mode() {
            info!(subject = %subject.label(), "demo mode enabled, generating template review");
            tokio::time::sleep(self.demo_delay).await;
            return ReviewResult {
                provider: DEMO_PROVIDER.to_string(),
                review: subject.template(Utc::now()),
                timestamp: Utc::now(),
                notice: None,
                failures: Vec::new(),
            };
        }

        let prompt = subject.prompt();
        let mut failures = Vec::new();

        for provider in &self.providers {
            info!(provider = provider.name(), subject = %subject.label(), "requesting review");

            match self.throttle.run(|| provider.generate(&prompt)).await {
                Ok(review) => {
                    return ReviewResult {
                        provider: provider.name().to_string(),
                        review,
                        timestamp: Utc::now(),
                        notice: None,
                        failures,
                    };
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "review provider failed");
                    failures.push(ProviderFailure::from(&e));
                }
            }
        }

        warn!(subject = %subject.label(), "all review providers failed, using template review");
        ReviewResult {
            provider: FALLBACK_PROVIDER.to_string(),
            review: subject.template(Utc::now()),
            timestamp: Utc::now(),
            notice: Some(FALLBACK_NOTICE.to_string()),
            failures,
        }
    }
}
