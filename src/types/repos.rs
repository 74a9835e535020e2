//! Repository-related data models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bytes of code per language, as returned by `GET /repos/{o}/{r}/languages`.
pub type Languages = BTreeMap<String, u64>;

/// Repository owner (user or organization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: String,
}

/// Repository license summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
}

/// Repository information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    /// Repository name
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    pub owner: Option<Owner>,
    #[serde(default)]
    pub private: bool,
    pub html_url: String,
    /// Repository description
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    /// Primary language as detected by GitHub
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub open_issues_count: u32,
    /// Size in kilobytes
    #[serde(default)]
    pub size: u64,
    pub default_branch: Option<String>,
    pub license: Option<License>,
    #[serde(default)]
    pub topics: Vec<String>,
    /// When the repository was created
    pub created_at: DateTime<Utc>,
    /// When the repository was last updated
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Owner login; `None` when GitHub omitted the owner.
    #[must_use]
    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.login.as_str())
    }

    /// Size in whole megabytes, rounded to nearest.
    #[must_use]
    pub fn size_mb(&self) -> u64 {
        (self.size + 512) / 1024
    }
}
