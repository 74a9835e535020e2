use octoscope::explorer::{Profile, RepositoryDetails, SearchOutcome};
use octoscope::format::{format_date, format_number, truncate_text};
use octoscope::listing::distinct_languages;
use octoscope::{LanguageShare, RateLimitStatus, Repository, ReviewResult};

const TOTAL_WIDTH: usize = 64;
const DESCRIPTION_WIDTH: usize = 100;

pub fn separator(title: &str) {
    let title = format!(" {title} ");
    let side = TOTAL_WIDTH.saturating_sub(title.chars().count()) / 2;
    println!("{}{title}{}", "─".repeat(side), "─".repeat(side));
}

pub fn status(message: &str) {
    eprintln!("» {message}");
}

fn key_value(key: &str, value: impl std::fmt::Display) {
    println!("  {key:<12} {value}");
}

pub fn search(query: &str, outcome: &SearchOutcome) {
    separator(&format!("users matching '{query}'"));
    if outcome.users.is_empty() {
        println!("  No users found.");
        return;
    }
    if outcome.via_direct_lookup {
        status("Search is rate limited; showing the exact username match.");
    }
    for user in &outcome.users {
        println!("  {:<24} {}", user.login, user.html_url);
    }
    println!(
        "\n  {} result(s) total",
        format_number(outcome.total_count)
    );
}

pub fn profile(profile: &Profile) {
    let user = &profile.user;
    separator(user.display_name());
    key_value("login", &user.login);
    if let Some(bio) = &user.bio {
        key_value("bio", bio);
    }
    if let Some(company) = &user.company {
        key_value("company", company);
    }
    if let Some(location) = &user.location {
        key_value("location", location);
    }
    if let Some(blog) = user.blog.as_deref().filter(|b| !b.is_empty()) {
        key_value("website", blog);
    }
    key_value("repos", format_number(u64::from(user.public_repos)));
    key_value("followers", format_number(u64::from(user.followers)));
    key_value("following", format_number(u64::from(user.following)));
    key_value("joined", format_date(user.created_at));
    key_value("profile", &user.html_url);

    if let Some(error) = &profile.repositories_error {
        status(&format!("Could not load repositories: {error}"));
        return;
    }
    let languages = distinct_languages(&profile.repositories);
    if !languages.is_empty() {
        key_value("languages", languages.join(", "));
    }
    println!();
    repositories(&profile.repositories);
}

pub fn repositories(repositories: &[Repository]) {
    if repositories.is_empty() {
        println!("  No repositories found.");
        return;
    }
    for repo in repositories {
        println!(
            "  {:<32} ★ {:<6} ⑂ {:<6} {:<12} {}",
            repo.name,
            format_number(u64::from(repo.stargazers_count)),
            format_number(u64::from(repo.forks_count)),
            repo.language.as_deref().unwrap_or("-"),
            format_date(repo.updated_at),
        );
        if let Some(description) = &repo.description {
            println!("    {}", truncate_text(description, DESCRIPTION_WIDTH));
        }
    }
}

pub fn repository(details: &RepositoryDetails, languages: &[LanguageShare]) {
    let repo = &details.repository;
    separator(&repo.full_name);
    if let Some(description) = &repo.description {
        println!("  {description}\n");
    }
    key_value("owner", repo.owner_login().unwrap_or("unknown"));
    key_value("stars", format_number(u64::from(repo.stargazers_count)));
    key_value("forks", format_number(u64::from(repo.forks_count)));
    key_value("watchers", format_number(u64::from(repo.watchers_count)));
    key_value("issues", format_number(u64::from(repo.open_issues_count)));
    if let Some(branch) = &repo.default_branch {
        key_value("branch", branch);
    }
    if let Some(license) = &repo.license {
        key_value("license", &license.name);
    }
    key_value("size", format!("{} MB", repo.size_mb()));
    key_value("created", format_date(repo.created_at));
    key_value("updated", format_date(repo.updated_at));
    key_value("url", &repo.html_url);

    if !languages.is_empty() {
        separator("languages");
        for share in languages {
            println!("  {:<20} {:>5.1}%  {}", share.name, share.percentage, share.color);
        }
    }

    separator("recent commits");
    if details.commits.is_empty() {
        println!("  No commits found.");
    }
    for commit in &details.commits {
        let date = commit.date().map(format_date).unwrap_or_default();
        println!(
            "  {}  {:<16} {:<14} {}",
            commit.short_sha(),
            truncate_text(commit.author_name().unwrap_or("unknown"), 16),
            date,
            truncate_text(commit.summary(), 60),
        );
    }
}

pub fn review(result: &ReviewResult) {
    separator(&format!("review by {}", result.provider));
    if let Some(notice) = &result.notice {
        status(notice);
    }
    for failure in &result.failures {
        status(&format!("{}: {}", failure.provider, failure.hint));
    }
    println!("{}", result.review);
}

pub fn rate_limit(status: &RateLimitStatus) {
    separator("github rate limit");
    let show = |value: Option<u32>| value.map_or_else(|| "?".to_string(), |v| v.to_string());
    key_value("limit", show(status.limit));
    key_value("remaining", show(status.remaining));
    key_value("used", show(status.used));
    if let Some(reset_at) = status.reset_at {
        key_value("resets", reset_at.format("%H:%M:%S UTC"));
    }
}

pub fn rate_limit_advice() {
    eprintln!("You've exceeded GitHub's API rate limit. This happens when making too many requests.");
    eprintln!(
        "  Quick fix: wait a few minutes and try again, or search for users directly by typing their exact username."
    );
    eprintln!(
        "  Permanent fix: set GITHUB_TOKEN to a personal access token to raise the limit from 60 to 5000 requests per hour."
    );
}
