//! Repositories resource client.

use std::sync::Arc;

use crate::clients::users::not_found_as;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Commit, Languages, Repository};

/// Client for repository-related operations.
pub struct ReposClient {
    transport: Arc<HttpTransport>,
}

impl ReposClient {
    /// Create a new repos client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get repository information.
    ///
    /// # Errors
    ///
    /// Returns "Repository not found" on 404, otherwise an error wrapped as
    /// "Failed to fetch repository".
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Repository, Error> {
        self.transport
            .get_json(&["repos", owner, repo], &[])
            .await
            .map_err(|e| not_found_as(e, "Repository not found", "Failed to fetch repository"))
    }

    /// Get the language byte breakdown of a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn languages(&self, owner: &str, repo: &str) -> Result<Languages, Error> {
        self.transport
            .get_json(&["repos", owner, repo, "languages"], &[])
            .await
            .map_err(|e| e.context("Failed to fetch repository languages"))
    }

    /// List recent commits on the default branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn commits(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Commit>, Error> {
        let params = [("page", page.to_string()), ("per_page", per_page.to_string())];

        self.transport
            .get_json(&["repos", owner, repo, "commits"], &params)
            .await
            .map_err(|e| e.context("Failed to fetch repository commits"))
    }
}
