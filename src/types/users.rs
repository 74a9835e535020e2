//! GitHub user models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full GitHub user profile, as returned by `GET /users/{login}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Login handle
    pub login: String,
    /// Numeric account id
    pub id: u64,
    /// Avatar image URL
    pub avatar_url: String,
    /// Profile page URL
    pub html_url: String,
    /// Display name
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    /// Free-form biography
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    /// Number of public repositories
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub public_gists: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    /// "User" or "Organization"
    #[serde(rename = "type", default = "default_account_type")]
    pub account_type: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name, falling back to the login handle.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.login)
    }
}

fn default_account_type() -> String {
    "User".to_string()
}

/// User entry in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(rename = "type", default = "default_account_type")]
    pub account_type: String,
    /// Search relevance; absent when the entry came from a direct lookup
    #[serde(default)]
    pub score: Option<f64>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            login: user.login.clone(),
            id: user.id,
            avatar_url: user.avatar_url.clone(),
            html_url: user.html_url.clone(),
            account_type: user.account_type.clone(),
            score: None,
        }
    }
}

/// Response from `GET /search/users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchUsersResponse {
    /// Total number of matches across all pages
    #[serde(default)]
    pub total_count: u64,
    /// True when GitHub gave up before scanning everything
    #[serde(default)]
    pub incomplete_results: bool,
    /// Matches on this page
    #[serde(default)]
    pub items: Vec<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "type": "User",
            "name": "The Octocat",
            "company": "@github",
            "blog": "https://github.blog",
            "location": "San Francisco",
            "email": null,
            "bio": null,
            "twitter_username": null,
            "public_repos": 8,
            "public_gists": 8,
            "followers": 17000,
            "following": 9,
            "created_at": "2011-01-25T18:44:36Z",
            "updated_at": "2024-01-22T12:13:38Z"
        }"#;

        let user: User = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(user.login, "octocat");
        assert_eq!(user.display_name(), "The Octocat");
        assert_eq!(user.followers, 17000);
        assert_eq!(user.account_type, "User");
    }

    #[test]
    fn test_search_response_deserialize() {
        let json = r#"{
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "login": "octocat",
                "id": 583231,
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
                "html_url": "https://github.com/octocat",
                "type": "User",
                "score": 1.0
            }]
        }"#;

        let response: SearchUsersResponse = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(response.total_count, 1);
        assert_eq!(response.items[0].login, "octocat");
        assert_eq!(response.items[0].score, Some(1.0));
    }
}
