//! Mock GitHub client and review provider for testing.
//!
//! `MockGitHubClient` implements [`GitHubApi`] without making network calls
//! and records every call so tests can assert on them.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::fixtures;
use crate::client::GitHubApi;
use crate::error::{Error, GitHubError, ReviewError};
use crate::review::ReviewProvider;
use crate::types::{Commit, Languages, Repository, SearchUsersResponse, User};

/// Record of a method call.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Method name (e.g., "users.get", "repos.languages")
    pub method: String,
    /// Arguments passed to the method
    pub args: Vec<String>,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(method: &str, args: Vec<String>) -> Self {
        Self {
            method: method.to_string(),
            args,
            timestamp: Utc::now(),
        }
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub struct MockResponse<T: Clone> {
    /// The data to return
    pub data: Option<T>,
    /// Error to return instead of data
    pub error: Option<GitHubError>,
    /// Number of times this response has been used
    pub call_count: u32,
}

impl<T: Clone> Default for MockResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            call_count: 0,
        }
    }
}

impl<T: Clone> MockResponse<T> {
    /// Create a new mock response with data.
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Create a new mock response with an error.
    pub fn with_error(error: GitHubError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Get the result, returning either the configured data or error.
    fn get_result(&mut self, default: T) -> Result<T, Error> {
        self.call_count += 1;
        if let Some(error) = &self.error {
            return Err(Error::GitHub(error.clone()));
        }
        Ok(self.data.clone().unwrap_or(default))
    }
}

type Slot<T> = Mutex<MockResponse<T>>;

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Mock GitHub client for testing.
///
/// Unconfigured methods return fixtures: `get_user` yields
/// [`fixtures::user`], `get_repository` yields [`fixtures::repository`],
/// and listings are empty.
#[derive(Default)]
pub struct MockGitHubClient {
    calls: Mutex<Vec<MockCall>>,
    search_response: Slot<SearchUsersResponse>,
    user_response: Slot<User>,
    repositories_response: Slot<Vec<Repository>>,
    repository_response: Slot<Repository>,
    languages_response: Slot<Languages>,
    commits_response: Slot<Vec<Commit>>,
}

impl MockGitHubClient {
    /// Create a new mock client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response for `search_users` calls.
    pub fn configure_search(&self, response: MockResponse<SearchUsersResponse>) {
        *lock(&self.search_response) = response;
    }

    /// Configure the response for `get_user` calls.
    pub fn configure_user(&self, response: MockResponse<User>) {
        *lock(&self.user_response) = response;
    }

    /// Configure the response for `list_user_repositories` calls.
    pub fn configure_repositories(&self, response: MockResponse<Vec<Repository>>) {
        *lock(&self.repositories_response) = response;
    }

    /// Configure the response for `get_repository` calls.
    pub fn configure_repository(&self, response: MockResponse<Repository>) {
        *lock(&self.repository_response) = response;
    }

    /// Configure the response for `get_repository_languages` calls.
    pub fn configure_languages(&self, response: MockResponse<Languages>) {
        *lock(&self.languages_response) = response;
    }

    /// Configure the response for `get_repository_commits` calls.
    pub fn configure_commits(&self, response: MockResponse<Vec<Commit>>) {
        *lock(&self.commits_response) = response;
    }

    fn record_call(&self, method: &str, args: Vec<String>) {
        lock(&self.calls).push(MockCall::new(method, args));
    }

    /// Check if a method was called.
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        lock(&self.calls).iter().any(|call| call.method == method)
    }

    /// Get the number of times a method was called.
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Get recorded calls, optionally filtered by method.
    #[must_use]
    pub fn get_calls(&self, method: Option<&str>) -> Vec<MockCall> {
        let calls = lock(&self.calls);
        match method {
            Some(m) => calls.iter().filter(|call| call.method == m).cloned().collect(),
            None => calls.clone(),
        }
    }

    /// Reset all recorded calls.
    pub fn reset(&self) {
        lock(&self.calls).clear();
    }
}

#[async_trait]
impl GitHubApi for MockGitHubClient {
    async fn search_users(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchUsersResponse, Error> {
        self.record_call(
            "users.search",
            vec![query.to_string(), page.to_string(), per_page.to_string()],
        );
        lock(&self.search_response).get_result(SearchUsersResponse::default())
    }

    async fn get_user(&self, login: &str) -> Result<User, Error> {
        self.record_call("users.get", vec![login.to_string()]);
        lock(&self.user_response).get_result(fixtures::user(login))
    }

    async fn list_user_repositories(
        &self,
        login: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, Error> {
        self.record_call(
            "users.repositories",
            vec![login.to_string(), page.to_string(), per_page.to_string()],
        );
        lock(&self.repositories_response).get_result(Vec::new())
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository, Error> {
        self.record_call("repos.get", vec![owner.to_string(), repo.to_string()]);
        lock(&self.repository_response).get_result(fixtures::repository(owner, repo))
    }

    async fn get_repository_languages(&self, owner: &str, repo: &str) -> Result<Languages, Error> {
        self.record_call("repos.languages", vec![owner.to_string(), repo.to_string()]);
        lock(&self.languages_response).get_result(Languages::new())
    }

    async fn get_repository_commits(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Commit>, Error> {
        self.record_call(
            "repos.commits",
            vec![
                owner.to_string(),
                repo.to_string(),
                page.to_string(),
                per_page.to_string(),
            ],
        );
        lock(&self.commits_response).get_result(Vec::new())
    }
}

/// Review provider that returns a fixed outcome and records prompts.
pub struct MockReviewProvider {
    name: String,
    outcome: Result<String, ReviewError>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockReviewProvider {
    /// Provider that always answers with `review`.
    #[must_use]
    pub fn succeeding(name: &str, review: &str) -> Self {
        Self {
            name: name.to_string(),
            outcome: Ok(review.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Provider that always fails with `error`.
    #[must_use]
    pub fn failing(name: &str, error: ReviewError) -> Self {
        Self {
            name: name.to_string(),
            outcome: Err(error),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of `generate` calls so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// The most recent prompt received.
    #[must_use]
    pub fn last_prompt(&self) -> Option<String> {
        lock(&self.prompts).last().cloned()
    }
}

#[async_trait]
impl ReviewProvider for MockReviewProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, prompt: &str) -> Result<String, ReviewError> {
        lock(&self.prompts).push(prompt.to_string());
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_defaults_to_fixtures() {
        let mock = MockGitHubClient::new();

        let user = mock.get_user("octocat").await.unwrap();
        let repo = mock.get_repository("octocat", "hello").await.unwrap();

        assert_eq!(user.login, "octocat");
        assert_eq!(repo.full_name, "octocat/hello");
        assert!(mock.was_called("users.get"));
        assert_eq!(mock.call_count("repos.get"), 1);
    }

    #[tokio::test]
    async fn test_mock_configured_error() {
        let mock = MockGitHubClient::new();
        mock.configure_user(MockResponse::with_error(GitHubError::NotFound {
            message: "User not found".to_string(),
        }));

        let result = mock.get_user("ghost").await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_mock_get_calls_and_reset() {
        let mock = MockGitHubClient::new();

        mock.search_users("rust", 1, 10).await.unwrap();
        mock.search_users("go", 2, 10).await.unwrap();
        mock.get_repository_languages("a", "b").await.unwrap();

        assert_eq!(mock.get_calls(None).len(), 3);
        let searches = mock.get_calls(Some("users.search"));
        assert_eq!(searches.len(), 2);
        assert_eq!(searches[1].args, ["go", "2", "10"]);

        mock.reset();
        assert!(!mock.was_called("users.search"));
    }

    #[tokio::test]
    async fn test_mock_review_provider_records_prompts() {
        let provider = MockReviewProvider::succeeding("Gemini", "fine");

        assert_eq!(provider.generate("first").await.unwrap(), "fine");
        provider.generate("second").await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.last_prompt().as_deref(), Some("second"));
    }
}
