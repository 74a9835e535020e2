//! Ready-made payloads for tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{Commit, CommitAccount, CommitDetail, Owner, Repository, Signature, User};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// A plain user with no name or bio.
#[must_use]
pub fn user(login: &str) -> User {
    User {
        login: login.to_string(),
        id: 1,
        avatar_url: format!("https://avatars.githubusercontent.com/{login}"),
        html_url: format!("https://github.com/{login}"),
        name: None,
        company: None,
        blog: None,
        location: None,
        email: None,
        bio: None,
        twitter_username: None,
        public_repos: 8,
        public_gists: 0,
        followers: 10,
        following: 2,
        account_type: "User".to_string(),
        created_at: date(2015, 1, 1),
        updated_at: date(2024, 1, 1),
    }
}

/// A public repository with no language, description or license.
#[must_use]
pub fn repository(owner: &str, name: &str) -> Repository {
    Repository {
        id: 1,
        name: name.to_string(),
        full_name: format!("{owner}/{name}"),
        owner: Some(Owner {
            login: owner.to_string(),
            avatar_url: String::new(),
            html_url: format!("https://github.com/{owner}"),
        }),
        private: false,
        html_url: format!("https://github.com/{owner}/{name}"),
        description: None,
        fork: false,
        language: None,
        stargazers_count: 0,
        watchers_count: 0,
        forks_count: 0,
        open_issues_count: 0,
        size: 0,
        default_branch: Some("main".to_string()),
        license: None,
        topics: Vec::new(),
        created_at: date(2020, 1, 1),
        updated_at: date(2024, 1, 1),
        pushed_at: None,
    }
}

/// A commit by `author` with the given message.
#[must_use]
pub fn commit(sha: &str, author: &str, message: &str) -> Commit {
    let signature = Signature {
        name: author.to_string(),
        email: None,
        date: date(2024, 1, 1),
    };

    Commit {
        sha: sha.to_string(),
        html_url: String::new(),
        commit: CommitDetail {
            message: message.to_string(),
            author: Some(signature.clone()),
            committer: Some(signature),
        },
        author: Some(CommitAccount {
            login: author.to_string(),
            avatar_url: String::new(),
        }),
        committer: None,
    }
}
