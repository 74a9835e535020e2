//! Commit models for `GET /repos/{o}/{r}/commits`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Git author or committer signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub email: Option<String>,
    pub date: DateTime<Utc>,
}

/// The git-level part of a commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitDetail {
    pub message: String,
    pub author: Option<Signature>,
    pub committer: Option<Signature>,
}

/// GitHub account linked to a commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitAccount {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// Commit entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    #[serde(default)]
    pub html_url: String,
    pub commit: CommitDetail,
    /// Linked GitHub account; absent when the email matches no account
    pub author: Option<CommitAccount>,
    pub committer: Option<CommitAccount>,
}

impl Commit {
    /// First line of the commit message.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.commit.message.lines().next().unwrap_or("")
    }

    /// Seven-character abbreviated SHA.
    #[must_use]
    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }

    /// Name of the git author, if recorded.
    #[must_use]
    pub fn author_name(&self) -> Option<&str> {
        self.commit.author.as_ref().map(|a| a.name.as_str())
    }

    /// Authored date, if recorded.
    #[must_use]
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().map(|a| a.date)
    }

    /// Avatar of the linked author account, else the committer account.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.author
            .as_ref()
            .or(self.committer.as_ref())
            .map(|a| a.avatar_url.as_str())
    }
}
