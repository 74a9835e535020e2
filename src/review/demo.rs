//! Template reviews used in demo mode and when every provider fails.
//!
//! Output depends only on the inputs and `now`, so the same profile always
//! yields the same review for a given day.

use chrono::{DateTime, Utc};

use crate::format::{days_between, format_short_date, years_between};
use crate::types::{Repository, User};

/// Language assumed when no repository reports one.
const FALLBACK_LANGUAGE: &str = "JavaScript";

/// Most common primary language; ties go to the one seen first.
#[must_use]
pub fn primary_language(repositories: &[Repository]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for language in repositories.iter().filter_map(|r| r.language.as_deref()) {
        match counts.iter_mut().find(|(name, _)| *name == language) {
            Some((_, count)) => *count += 1,
            None => counts.push((language, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((name, count));
        }
    }

    best.map_or_else(|| FALLBACK_LANGUAGE.to_string(), |(name, _)| name.to_string())
}

fn project_types(repositories: &[Repository]) -> String {
    let has = |languages: &[&str]| {
        repositories
            .iter()
            .any(|r| r.language.as_deref().is_some_and(|l| languages.contains(&l)))
    };

    let mut types = String::new();
    if has(&["JavaScript"]) {
        types.push_str("Web Development, ");
    }
    if has(&["Python"]) {
        types.push_str("Data Science/Automation, ");
    }
    if has(&["Java", "C#", "C++"]) {
        types.push_str("Application Development, ");
    }
    types.push_str("General Software Engineering");
    types
}

fn community_presence(followers: u32) -> &'static str {
    match followers {
        f if f > 100 => "Strong",
        f if f > 20 => "Good",
        _ => "Growing",
    }
}

fn profile_rating(public_repos: u32) -> &'static str {
    match public_repos {
        n if n > 20 => "Advanced",
        n if n > 10 => "Intermediate+",
        _ => "Intermediate",
    }
}

/// Activity label from days since the last update.
#[must_use]
pub fn activity_level(days_since_update: i64) -> &'static str {
    match days_since_update {
        d if d < 30 => "Highly Active",
        d if d < 90 => "Active",
        d if d < 365 => "Moderately Active",
        _ => "Low Activity",
    }
}

/// Score out of ten from the star count.
#[must_use]
pub fn repository_score(stars: u32) -> &'static str {
    match stars {
        s if s > 50 => "9/10",
        s if s > 10 => "7/10",
        s if s > 0 => "6/10",
        _ => "5/10",
    }
}

/// Template review of a whole profile.
#[must_use]
pub fn profile_review(user: &User, repositories: &[Repository], now: DateTime<Utc>) -> String {
    let primary = primary_language(repositories);
    let years = years_between(user.created_at, now);
    let bio = user
        .bio
        .as_deref()
        .filter(|b| !b.is_empty())
        .map(|b| format!("> \"{b}\""))
        .unwrap_or_default();
    let complexity = if repositories.iter().any(|r| r.stargazers_count > 10) {
        "Intermediate to Advanced"
    } else {
        "Beginner to Intermediate"
    };

    format!(
        "# GitHub Profile Review: {name} (Demo Mode)

## Profile Overview
**{login}** has been on GitHub since {since}, demonstrating a {years}+ year history in software development.

{bio}

## Technical Skills Assessment
Based on repository analysis, {login} shows proficiency in:
- **Primary Language**: {primary}
- **Project Types**: {types}
- **Complexity Level**: {complexity}

## Community Engagement
- **Repositories**: {repos} public projects
- **Followers**: {followers} ({presence} community presence)
- **Following**: {following} developers
- **Collaboration**: Evidence of active participation in the developer community

## Areas of Expertise
Based on the repository analysis:
1. **{primary} Development** - Primary focus area
2. **Web Development** - Multiple web-related projects
3. **Open Source** - Consistent public repository contributions

## Growth Recommendations
1. **Enhance Documentation**: Add more detailed README files with setup instructions and examples
2. **Increase Collaboration**: Consider contributing to larger open source projects
3. **Add Testing**: Implement comprehensive testing suites for better code quality
4. **Performance Optimization**: Focus on code efficiency and best practices

## Overall Rating: {rating}

*This is a demo review. For more detailed analysis, please configure valid API keys for Gemini or Mistral AI services.*",
        name = user.display_name(),
        login = user.login,
        since = format_short_date(user.created_at),
        types = project_types(repositories),
        repos = user.public_repos,
        followers = user.followers,
        presence = community_presence(user.followers),
        following = user.following,
        rating = profile_rating(user.public_repos),
    )
}

/// Template review of a single repository.
#[must_use]
pub fn repository_review(repo: &Repository, now: DateTime<Utc>) -> String {
    let days_since_update = days_between(repo.updated_at, now);
    let language = repo.language.as_deref();
    let interest = if repo.stargazers_count > 10 { "good" } else { "emerging" };

    let documentation = match repo.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => format!("✅ Project has a clear description: \"{description}\""),
        None => "⚠️ No project description provided".to_string(),
    };
    let issue_note = if repo.open_issues_count > 0 {
        "(active community engagement)"
    } else {
        "(well-maintained)"
    };
    let docs_verb = if repo.description.as_deref().is_some_and(|d| !d.is_empty()) {
        "Expand"
    } else {
        "Add"
    };
    let engagement = if repo.stargazers_count < 5 {
        "Promote the project to gain visibility"
    } else {
        "Continue engaging with contributors"
    };
    let license_advice = if repo.license.is_some() {
        "License is properly configured"
    } else {
        "Consider adding an open source license"
    };

    format!(
        "# Repository Review: {name} (Demo Mode)

## Code Quality Assessment
**{name}** is a {kind} project with {stars} stars and {forks} forks. The repository demonstrates {interest} community interest.

## Technical Implementation
- **Primary Language**: {primary}
- **Repository Size**: {size} MB
- **License**: {license}
- **Visibility**: {visibility} repository

## Maintenance & Activity
- **Created**: {created} ({age} years ago)
- **Last Updated**: {updated} ({days_since_update} days ago)
- **Activity Level**: {activity}

## Documentation Quality
{documentation}

## Best Practices Analysis
- **Issue Tracking**: {issues} open issues {issue_note}
- **Default Branch**: {branch}

## Recommendations
1. **Enhance Documentation**: {docs_verb} comprehensive README with usage examples
2. **Community Engagement**: {engagement}
3. **Code Quality**: Implement automated testing and CI/CD workflows
4. **License**: {license_advice}

## Overall Score: {score}

*This is a demo review. For detailed code analysis, please configure valid API keys.*",
        name = repo.name,
        kind = language.unwrap_or("multi-language"),
        stars = repo.stargazers_count,
        forks = repo.forks_count,
        primary = language.unwrap_or("Mixed"),
        size = repo.size_mb(),
        license = repo
            .license
            .as_ref()
            .map_or("No license specified", |l| l.name.as_str()),
        visibility = if repo.private { "Private" } else { "Public" },
        created = format_short_date(repo.created_at),
        age = years_between(repo.created_at, now),
        updated = format_short_date(repo.updated_at),
        activity = activity_level(days_since_update),
        issues = repo.open_issues_count,
        branch = repo.default_branch.as_deref().unwrap_or("main"),
        score = repository_score(repo.stargazers_count),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{repository, user};
    use crate::types::License;
    use chrono::TimeZone;

    fn with_language(name: &str, language: Option<&str>) -> Repository {
        let mut repo = repository("octocat", name);
        repo.language = language.map(String::from);
        repo
    }

    #[test]
    fn test_primary_language_most_frequent() {
        let repos = vec![
            with_language("a", Some("Go")),
            with_language("b", Some("Rust")),
            with_language("c", None),
            with_language("d", Some("Rust")),
        ];
        assert_eq!(primary_language(&repos), "Rust");
    }

    #[test]
    fn test_primary_language_tie_keeps_first_seen() {
        let repos = vec![with_language("a", Some("Go")), with_language("b", Some("Rust"))];
        assert_eq!(primary_language(&repos), "Go");
    }

    #[test]
    fn test_primary_language_default() {
        assert_eq!(primary_language(&[]), "JavaScript");
        assert_eq!(primary_language(&[with_language("a", None)]), "JavaScript");
    }

    #[test]
    fn test_profile_review_content() {
        let mut octocat = user("octocat");
        octocat.name = Some("The Octocat".to_string());
        octocat.bio = Some("Mascot".to_string());
        octocat.followers = 150;
        octocat.public_repos = 12;
        octocat.created_at = Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap();

        let mut starred = with_language("popular", Some("Python"));
        starred.stargazers_count = 11;
        let repos = vec![with_language("site", Some("JavaScript")), starred];

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let review = profile_review(&octocat, &repos, now);

        assert!(review.starts_with("# GitHub Profile Review: The Octocat (Demo Mode)"));
        assert!(review.contains("since 6/1/2015, demonstrating a 9+ year history"));
        assert!(review.contains("> \"Mascot\""));
        assert!(review.contains("- **Primary Language**: JavaScript"));
        assert!(review.contains(
            "- **Project Types**: Web Development, Data Science/Automation, General Software Engineering"
        ));
        assert!(review.contains("- **Complexity Level**: Intermediate to Advanced"));
        assert!(review.contains("- **Followers**: 150 (Strong community presence)"));
        assert!(review.contains("## Overall Rating: Intermediate+"));
    }

    #[test]
    fn test_profile_review_tiers_for_small_profile() {
        let mut newcomer = user("newcomer");
        newcomer.followers = 3;
        newcomer.public_repos = 2;

        let review = profile_review(&newcomer, &[], Utc::now());

        assert!(review.starts_with("# GitHub Profile Review: newcomer (Demo Mode)"));
        assert!(review.contains("- **Project Types**: General Software Engineering"));
        assert!(review.contains("- **Complexity Level**: Beginner to Intermediate"));
        assert!(review.contains("(Growing community presence)"));
        assert!(review.contains("## Overall Rating: Intermediate\n"));
    }

    #[test]
    fn test_activity_and_score_thresholds() {
        assert_eq!(activity_level(0), "Highly Active");
        assert_eq!(activity_level(29), "Highly Active");
        assert_eq!(activity_level(30), "Active");
        assert_eq!(activity_level(89), "Active");
        assert_eq!(activity_level(90), "Moderately Active");
        assert_eq!(activity_level(364), "Moderately Active");
        assert_eq!(activity_level(365), "Low Activity");

        assert_eq!(repository_score(51), "9/10");
        assert_eq!(repository_score(50), "7/10");
        assert_eq!(repository_score(11), "7/10");
        assert_eq!(repository_score(10), "6/10");
        assert_eq!(repository_score(1), "6/10");
        assert_eq!(repository_score(0), "5/10");
    }

    #[test]
    fn test_repository_review_content() {
        let mut repo = repository("octocat", "hello-world");
        repo.language = Some("Rust".to_string());
        repo.description = Some("My first repo".to_string());
        repo.stargazers_count = 20;
        repo.forks_count = 4;
        repo.open_issues_count = 2;
        repo.license = Some(License {
            key: "mit".to_string(),
            name: "MIT License".to_string(),
            spdx_id: Some("MIT".to_string()),
        });
        repo.created_at = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        repo.updated_at = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let review = repository_review(&repo, now);

        assert!(review.starts_with("# Repository Review: hello-world (Demo Mode)"));
        assert!(review.contains("is a Rust project with 20 stars and 4 forks"));
        assert!(review.contains("demonstrates good community interest"));
        assert!(review.contains("- **License**: MIT License"));
        assert!(review.contains("- **Last Updated**: 5/20/2024 (12 days ago)"));
        assert!(review.contains("- **Activity Level**: Highly Active"));
        assert!(review.contains("✅ Project has a clear description: \"My first repo\""));
        assert!(review.contains("2 open issues (active community engagement)"));
        assert!(review.contains("1. **Enhance Documentation**: Expand comprehensive README"));
        assert!(review.contains("4. **License**: License is properly configured"));
        assert!(review.contains("## Overall Score: 7/10"));
    }

    #[test]
    fn test_repository_review_bare_repo() {
        let repo = repository("octocat", "empty");
        let review = repository_review(&repo, Utc::now());

        assert!(review.contains("is a multi-language project"));
        assert!(review.contains("- **Primary Language**: Mixed"));
        assert!(review.contains("⚠️ No project description provided"));
        assert!(review.contains("(well-maintained)"));
        assert!(review.contains("Promote the project to gain visibility"));
        assert!(review.contains("Consider adding an open source license"));
        assert!(review.contains("## Overall Score: 5/10"));
    }
}
