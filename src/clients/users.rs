//! Users resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Repository, SearchUsersResponse, User};

/// Client for user-related operations.
pub struct UsersClient {
    transport: Arc<HttpTransport>,
}

impl UsersClient {
    /// Create a new users client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Search users by free-text query.
    ///
    /// # Arguments
    ///
    /// * `query` - GitHub search syntax, e.g. `"tom location:berlin"`
    /// * `page` - 1-based page number
    /// * `per_page` - Results per page (GitHub caps this at 100)
    ///
    /// # Errors
    ///
    /// Returns an error wrapped as "Failed to search users" if the request fails.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchUsersResponse, Error> {
        let params = [
            ("q", query.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];

        self.transport
            .get_json(&["search", "users"], &params)
            .await
            .map_err(|e| e.context("Failed to search users"))
    }

    /// Get a user's public profile.
    ///
    /// # Errors
    ///
    /// Returns "User not found" on 404, otherwise an error wrapped as
    /// "Failed to fetch user".
    pub async fn get(&self, login: &str) -> Result<User, Error> {
        self.transport
            .get_json(&["users", login], &[])
            .await
            .map_err(|e| not_found_as(e, "User not found", "Failed to fetch user"))
    }

    /// List a user's public repositories, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error wrapped as "Failed to fetch repositories" if the request fails.
    pub async fn repositories(
        &self,
        login: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, Error> {
        let params = [
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
        ];

        self.transport
            .get_json(&["users", login, "repos"], &params)
            .await
            .map_err(|e| e.context("Failed to fetch repositories"))
    }
}

/// Replace a 404 with a fixed message; wrap anything else with `context`.
pub(crate) fn not_found_as(error: Error, not_found: &str, context: &str) -> Error {
    if error.is_not_found() {
        Error::GitHub(crate::error::GitHubError::NotFound {
            message: not_found.to_string(),
        })
    } else {
        error.context(context)
    }
}
