//! GitHub client.
//!
//! [`GitHubClient`] aggregates the resource clients over one shared
//! transport. [`GitHubApi`] is the seam the rest of the crate depends on, so
//! callers can swap in [`crate::testing::MockGitHubClient`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::{ReposClient, UsersClient};
use crate::config::Config;
use crate::error::Error;
use crate::transport::{HttpTransport, RateLimitStatus, RetryConfig};
use crate::types::{Commit, Languages, Repository, SearchUsersResponse, User};

/// Default base URL for the GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default page size for user search.
pub const SEARCH_PAGE_SIZE: u32 = 10;

/// Default page size for repository listings.
pub const REPOS_PAGE_SIZE: u32 = 30;

/// Default page size for commit listings.
pub const COMMITS_PAGE_SIZE: u32 = 10;

/// Read-only GitHub operations used by the explorer and the CLI.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /search/users`
    async fn search_users(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchUsersResponse, Error>;

    /// `GET /users/{login}`
    async fn get_user(&self, login: &str) -> Result<User, Error>;

    /// `GET /users/{login}/repos`, most recently updated first
    async fn list_user_repositories(
        &self,
        login: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, Error>;

    /// `GET /repos/{owner}/{repo}`
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, Error>;

    /// `GET /repos/{owner}/{repo}/languages`
    async fn get_repository_languages(&self, owner: &str, repo: &str) -> Result<Languages, Error>;

    /// `GET /repos/{owner}/{repo}/commits`
    async fn get_repository_commits(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Commit>, Error>;
}

/// Main client for interacting with the GitHub REST API.
///
/// # Example
///
/// ```rust,ignore
/// use octoscope::{GitHubApi, GitHubClient};
///
/// let client = GitHubClient::new(None, None, None, None)?;
/// let user = client.get_user("octocat").await?;
/// let repos = client.users().repositories("octocat", 1, 30).await?;
/// ```
pub struct GitHubClient {
    transport: Arc<HttpTransport>,
    users: UsersClient,
    repos: ReposClient,
}

impl GitHubClient {
    /// Create a new GitHub client.
    ///
    /// # Arguments
    ///
    /// * `token` - Optional personal access token
    /// * `base_url` - Base URL for API requests (default: <https://api.github.com>)
    /// * `timeout` - Request timeout (default: 30 seconds)
    /// * `retry_config` - Configuration for retry behavior (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(
        token: Option<&str>,
        base_url: Option<&str>,
        timeout: Option<Duration>,
        retry_config: Option<RetryConfig>,
    ) -> Result<Self, Error> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport = Arc::new(HttpTransport::new(base_url, token, timeout, retry_config)?);

        Ok(Self {
            users: UsersClient::new(Arc::clone(&transport)),
            repos: ReposClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(
            config.github_token.as_deref(),
            Some(&config.github_api_base),
            Some(config.http_timeout),
            None,
        )
    }

    /// Get the underlying HTTP transport (for advanced use cases).
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Get the users client.
    #[must_use]
    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    /// Get the repos client.
    #[must_use]
    pub fn repos(&self) -> &ReposClient {
        &self.repos
    }

    /// Rate limit headers seen on the most recent response.
    #[must_use]
    pub fn last_rate_limit(&self) -> Option<RateLimitStatus> {
        self.transport.rate_limit_status()
    }

    /// Ask GitHub for the current core rate limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn rate_limit(&self) -> Result<RateLimitStatus, Error> {
        self.transport
            .fetch_rate_limit()
            .await
            .map_err(|e| e.context("Failed to fetch rate limit"))
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn search_users(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchUsersResponse, Error> {
        self.users.search(query, page, per_page).await
    }

    async fn get_user(&self, login: &str) -> Result<User, Error> {
        self.users.get(login).await
    }

    async fn list_user_repositories(
        &self,
        login: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, Error> {
        self.users.repositories(login, page, per_page).await
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, Error> {
        self.repos.get(owner, repo).await
    }

    async fn get_repository_languages(&self, owner: &str, repo: &str) -> Result<Languages, Error> {
        self.repos.languages(owner, repo).await
    }

    async fn get_repository_commits(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Commit>, Error> {
        self.repos.commits(owner, repo, page, per_page).await
    }
}
