//! Data loading for the explorer views: search, profile, repository detail.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::client::GitHubApi;
use crate::error::Error;
use crate::types::{Commit, Languages, Repository, User, UserSummary};

/// Longest login GitHub allows.
pub const MAX_LOGIN_LEN: usize = 39;

/// Whether `query` could be a login: ASCII alphanumerics, `-` or `_`, at
/// most 39 characters.
#[must_use]
pub fn looks_like_username(query: &str) -> bool {
    !query.is_empty()
        && query.len() <= MAX_LOGIN_LEN
        && query
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Result of a user search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub users: Vec<UserSummary>,
    pub total_count: u64,
    /// True when the search API was rate limited and the query was resolved
    /// by fetching the user directly
    pub via_direct_lookup: bool,
}

/// Search users.
///
/// A blank query returns no results without touching the API. When the
/// search endpoint is rate limited and the query looks like a login, the
/// user is looked up directly instead; if that also fails, the original
/// rate limit error is returned.
///
/// # Errors
///
/// Returns the search error when no fallback applies or the fallback fails.
pub async fn search_users<A>(
    api: &A,
    query: &str,
    page: u32,
    per_page: u32,
) -> Result<SearchOutcome, Error>
where
    A: GitHubApi + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchOutcome::default());
    }

    match api.search_users(query, page, per_page).await {
        Ok(response) => {
            debug!(query, total = response.total_count, "user search complete");
            Ok(SearchOutcome {
                users: response.items,
                total_count: response.total_count,
                via_direct_lookup: false,
            })
        }
        Err(e) if e.is_rate_limited() && looks_like_username(query) => {
            warn!(query, "search rate limited, trying direct user lookup");
            match api.get_user(query).await {
                Ok(user) => {
                    info!(login = %user.login, "resolved search by direct lookup");
                    Ok(SearchOutcome {
                        users: vec![UserSummary::from(&user)],
                        total_count: 1,
                        via_direct_lookup: true,
                    })
                }
                Err(lookup_error) => {
                    debug!(error = %lookup_error, "direct lookup failed");
                    Err(e)
                }
            }
        }
        Err(e) => Err(e),
    }
}

/// A user with their repositories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub user: User,
    pub repositories: Vec<Repository>,
    /// Set when the profile loaded but the repository list did not
    pub repositories_error: Option<String>,
}

/// Load a profile and its repositories concurrently.
///
/// # Errors
///
/// Returns an error if the user cannot be fetched. A failed repository
/// listing is reported in [`Profile::repositories_error`] instead.
pub async fn load_profile<A>(api: &A, login: &str, per_page: u32) -> Result<Profile, Error>
where
    A: GitHubApi + ?Sized,
{
    let (user, repositories) = tokio::join!(
        api.get_user(login),
        api.list_user_repositories(login, 1, per_page),
    );

    let user = user?;
    let (repositories, repositories_error) = match repositories {
        Ok(repos) => (repos, None),
        Err(e) => {
            warn!(login, error = %e, "repository listing failed");
            (Vec::new(), Some(e.to_string()))
        }
    };

    Ok(Profile {
        user,
        repositories,
        repositories_error,
    })
}

/// Everything shown on a repository page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryDetails {
    pub repository: Repository,
    pub languages: Languages,
    pub commits: Vec<Commit>,
}

/// Load a repository, its languages and recent commits concurrently.
///
/// # Errors
///
/// Returns the first error from any of the three requests.
pub async fn load_repository<A>(
    api: &A,
    owner: &str,
    repo: &str,
    commits: u32,
) -> Result<RepositoryDetails, Error>
where
    A: GitHubApi + ?Sized,
{
    let (repository, languages, commits) = tokio::try_join!(
        api.get_repository(owner, repo),
        api.get_repository_languages(owner, repo),
        api.get_repository_commits(owner, repo, 1, commits),
    )?;

    Ok(RepositoryDetails {
        repository,
        languages,
        commits,
    })
}

/// Split `owner/repo`.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if either part is missing.
pub fn parse_full_name(full_name: &str) -> Result<(&str, &str), Error> {
    match full_name.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(Error::InvalidInput(format!(
            "expected OWNER/REPO, got '{full_name}'"
        ))),
    }
}
