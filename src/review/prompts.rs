//! Prompt text sent to the generative-text providers.

use std::fmt::Write;

use crate::format::format_short_date;
use crate::types::{Repository, User};

/// System instruction for chat-style providers.
pub const SYSTEM_PROMPT: &str = "You are an expert software engineer and code reviewer. Provide detailed, professional and constructive feedback on GitHub profiles and repositories.";

/// Closing instructions of the profile prompt.
const PROFILE_INSTRUCTIONS: &str = "Provide a detailed professional assessment of this GitHub profile including:
1. Overall skills assessment based on repository analysis
2. Technical proficiency evaluation
3. Project diversity and complexity assessment
4. Growth over time and recent activity patterns
5. Development strengths and potential areas for improvement
6. Recommended focus areas for skill development
7. Career development suggestions based on the profile

Format your response in markdown with clear sections and bullet points. Include specific observations about repositories that stand out.
";

/// One repository block of the profile prompt. Blocks carry a leading and
/// trailing newline and are joined with another, so entries are separated by
/// two blank lines.
fn repository_entry(repo: &Repository) -> String {
    format!(
        "\n- {name}\n  Language: {language}\n  Stars: {stars}\n  Forks: {forks}\n  Created: {created}\n  Last updated: {updated}\n  Description: {description}\n",
        name = repo.name,
        language = repo.language.as_deref().unwrap_or("Not specified"),
        stars = repo.stargazers_count,
        forks = repo.forks_count,
        created = format_short_date(repo.created_at),
        updated = format_short_date(repo.updated_at),
        description = repo.description.as_deref().unwrap_or("No description"),
    )
}

/// Prompt asking for an assessment of a whole profile.
#[must_use]
pub fn profile_prompt(user: &User, repositories: &[Repository]) -> String {
    let entries: Vec<String> = repositories.iter().map(repository_entry).collect();

    format!(
        "
As an expert code reviewer and software engineering analyst, please analyze this GitHub profile and provide comprehensive insights:

# GitHub User: {login}
- Name: {name}
- Bio: {bio}
- Public Repositories: {repos}
- Followers: {followers}
- Following: {following}
- Account created: {created}
- Last active: {updated}

## Repositories ({count} most recent):
{entries}

{PROFILE_INSTRUCTIONS}",
        login = user.login,
        name = user.name.as_deref().unwrap_or("Not specified"),
        bio = user.bio.as_deref().unwrap_or("Not specified"),
        repos = user.public_repos,
        followers = user.followers,
        following = user.following,
        created = format_short_date(user.created_at),
        updated = format_short_date(user.updated_at),
        count = repositories.len(),
        entries = entries.join("\n"),
    )
}

/// Prompt asking for an assessment of one repository.
#[must_use]
pub fn repository_prompt(repo: &Repository) -> String {
    let mut prompt = String::from("\n");

    let _ = writeln!(
        prompt,
        "As an expert code reviewer and software engineering analyst, please provide a comprehensive assessment of this GitHub repository:\n"
    );
    let _ = writeln!(prompt, "# Repository: {}", repo.name);
    let _ = writeln!(prompt, "- Owner: {}", repo.owner_login().unwrap_or("Unknown"));
    let _ = writeln!(prompt, "- Language: {}", repo.language.as_deref().unwrap_or("Not specified"));
    let _ = writeln!(prompt, "- Stars: {}", repo.stargazers_count);
    let _ = writeln!(prompt, "- Forks: {}", repo.forks_count);
    let _ = writeln!(prompt, "- Watchers: {}", repo.watchers_count);
    let _ = writeln!(prompt, "- Open Issues: {}", repo.open_issues_count);
    let _ = writeln!(prompt, "- Created: {}", format_short_date(repo.created_at));
    let _ = writeln!(prompt, "- Last updated: {}", format_short_date(repo.updated_at));
    let _ = writeln!(
        prompt,
        "- Description: {}",
        repo.description.as_deref().unwrap_or("No description")
    );
    let _ = writeln!(
        prompt,
        "- Default branch: {}",
        repo.default_branch.as_deref().unwrap_or("main")
    );
    let _ = writeln!(
        prompt,
        "- License: {}",
        repo.license.as_ref().map_or("Not specified", |l| l.name.as_str())
    );
    let _ = writeln!(prompt, "- Size: {} MB", repo.size_mb());

    prompt.push_str(
        "\nProvide a comprehensive code quality assessment covering:
1. Overall project structure and organization analysis
2. Technical implementation quality assessment
3. Best practices adherence evaluation
4. Documentation quality and completeness
5. Potential areas for improvement
6. Maintenance and update frequency analysis
7. Community engagement and open source practices

Format your response in markdown with clear sections. Be specific and detailed in your analysis.
",
    );

    prompt
}
