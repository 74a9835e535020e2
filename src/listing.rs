//! Sorting, filtering and language statistics for repository listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::format::language_color;
use crate::types::{Languages, Repository};

/// Sort order for a repository list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepoSort {
    /// Most recently updated first
    #[default]
    Updated,
    /// Name, case-insensitive ascending
    Name,
    /// Most stars first
    Stars,
    /// Most forks first
    Forks,
}

impl RepoSort {
    fn compare(self, a: &Repository, b: &Repository) -> Ordering {
        match self {
            Self::Updated => b.updated_at.cmp(&a.updated_at),
            Self::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            Self::Stars => b.stargazers_count.cmp(&a.stargazers_count),
            Self::Forks => b.forks_count.cmp(&a.forks_count),
        }
    }
}

impl fmt::Display for RepoSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Updated => "updated",
            Self::Name => "name",
            Self::Stars => "stars",
            Self::Forks => "forks",
        };
        f.write_str(name)
    }
}

impl FromStr for RepoSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "updated" => Ok(Self::Updated),
            "name" => Ok(Self::Name),
            "stars" => Ok(Self::Stars),
            "forks" => Ok(Self::Forks),
            other => Err(format!(
                "unknown sort '{other}', expected one of: updated, name, stars, forks"
            )),
        }
    }
}

/// Filter by primary language, then sort. `None` or an empty filter keeps
/// every repository. Sorting is stable.
#[must_use]
pub fn arrange_repositories(
    repositories: &[Repository],
    sort: RepoSort,
    language: Option<&str>,
) -> Vec<Repository> {
    let language = language.filter(|l| !l.is_empty());

    let mut arranged: Vec<Repository> = repositories
        .iter()
        .filter(|repo| language.map_or(true, |lang| repo.language.as_deref() == Some(lang)))
        .cloned()
        .collect();

    arranged.sort_by(|a, b| sort.compare(a, b));
    arranged
}

/// Unique primary languages in first-seen order.
#[must_use]
pub fn distinct_languages(repositories: &[Repository]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for language in repositories.iter().filter_map(|r| r.language.as_ref()) {
        if !seen.contains(language) {
            seen.push(language.clone());
        }
    }
    seen
}

/// One language's share of a repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub name: String,
    pub bytes: u64,
    /// Share of total bytes, 0-100
    pub percentage: f64,
    pub color: &'static str,
}

/// Language shares sorted by bytes, largest first. Empty when the
/// repository has no measured code.
#[must_use]
pub fn language_breakdown(languages: &Languages) -> Vec<LanguageShare> {
    let total: u64 = languages.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<LanguageShare> = languages
        .iter()
        .map(|(name, &bytes)| LanguageShare {
            name: name.clone(),
            bytes,
            percentage: bytes as f64 / total as f64 * 100.0,
            color: language_color(name),
        })
        .collect();

    shares.sort_by(|a, b| b.bytes.cmp(&a.bytes));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::repository;

    fn names(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<Repository> {
        let mut alpha = repository("octocat", "alpha");
        alpha.language = Some("Rust".to_string());
        alpha.stargazers_count = 5;
        alpha.forks_count = 9;
        alpha.updated_at = "2024-03-01T00:00:00Z".parse().unwrap();

        let mut beta = repository("octocat", "Beta");
        beta.language = Some("Go".to_string());
        beta.stargazers_count = 50;
        beta.forks_count = 1;
        beta.updated_at = "2024-05-01T00:00:00Z".parse().unwrap();

        let mut gamma = repository("octocat", "gamma");
        gamma.language = None;
        gamma.stargazers_count = 10;
        gamma.forks_count = 3;
        gamma.updated_at = "2023-12-01T00:00:00Z".parse().unwrap();

        let mut delta = repository("octocat", "delta");
        delta.language = Some("Rust".to_string());
        delta.stargazers_count = 0;
        delta.forks_count = 0;
        delta.updated_at = "2024-04-01T00:00:00Z".parse().unwrap();

        vec![alpha, beta, gamma, delta]
    }

    #[test]
    fn test_sort_orders() {
        let repos = sample();

        assert_eq!(
            names(&arrange_repositories(&repos, RepoSort::Updated, None)),
            ["Beta", "delta", "alpha", "gamma"]
        );
        assert_eq!(
            names(&arrange_repositories(&repos, RepoSort::Name, None)),
            ["alpha", "Beta", "delta", "gamma"]
        );
        assert_eq!(
            names(&arrange_repositories(&repos, RepoSort::Stars, None)),
            ["Beta", "gamma", "alpha", "delta"]
        );
        assert_eq!(
            names(&arrange_repositories(&repos, RepoSort::Forks, None)),
            ["alpha", "gamma", "Beta", "delta"]
        );
    }

    #[test]
    fn test_language_filter() {
        let repos = sample();

        assert_eq!(
            names(&arrange_repositories(&repos, RepoSort::Name, Some("Rust"))),
            ["alpha", "delta"]
        );
        assert_eq!(arrange_repositories(&repos, RepoSort::Name, Some("")).len(), 4);
        assert!(arrange_repositories(&repos, RepoSort::Name, Some("COBOL")).is_empty());
    }

    #[test]
    fn test_distinct_languages_first_seen_order() {
        assert_eq!(distinct_languages(&sample()), ["Rust", "Go"]);
    }

    #[test]
    fn test_sort_parse_and_display() {
        assert_eq!("Stars".parse::<RepoSort>(), Ok(RepoSort::Stars));
        assert_eq!(RepoSort::default(), RepoSort::Updated);
        assert_eq!(RepoSort::Forks.to_string(), "forks");
        assert!("size".parse::<RepoSort>().is_err());
    }

    #[test]
    fn test_language_breakdown() {
        let languages: Languages = [
            ("Rust".to_string(), 750),
            ("Shell".to_string(), 50),
            ("Python".to_string(), 200),
        ]
        .into_iter()
        .collect();

        let shares = language_breakdown(&languages);

        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].name, "Rust");
        assert!((shares[0].percentage - 75.0).abs() < 1e-9);
        assert_eq!(shares[0].color, "#dea584");
        assert_eq!(shares[1].name, "Python");
        assert_eq!(shares[2].name, "Shell");
    }

    #[test]
    fn test_language_breakdown_empty_total() {
        let languages: Languages = [("Rust".to_string(), 0)].into_iter().collect();
        assert!(language_breakdown(&languages).is_empty());
        assert!(language_breakdown(&Languages::new()).is_empty());
    }
}
