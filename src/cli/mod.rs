pub mod print;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use octoscope::client::{COMMITS_PAGE_SIZE, REPOS_PAGE_SIZE, SEARCH_PAGE_SIZE};
use octoscope::explorer::{self, parse_full_name};
use octoscope::listing::{arrange_repositories, language_breakdown};
use octoscope::{Config, GitHubApi, GitHubClient, RepoSort, ReviewService};

#[derive(Parser)]
#[command(name = "octoscope")]
#[command(about = "Explore GitHub users and repositories, with AI reviews.")]
#[command(version)]
pub struct CommandLine {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search GitHub users
    #[command(alias = "s")]
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = SEARCH_PAGE_SIZE)]
        per_page: u32,
    },
    /// Show a user's profile
    #[command(alias = "u")]
    User { login: String },
    /// List a user's repositories
    Repos {
        login: String,
        /// updated, name, stars or forks
        #[arg(long, default_value_t = RepoSort::Updated)]
        sort: RepoSort,
        /// Keep only repositories with this primary language
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show a repository with its languages and recent commits
    #[command(alias = "r")]
    Repo {
        /// OWNER/REPO
        full_name: String,
        #[arg(long, default_value_t = COMMITS_PAGE_SIZE)]
        commits: u32,
    },
    /// Ask for an AI review of a profile
    ReviewProfile { login: String },
    /// Ask for an AI review of a repository
    ReviewRepo {
        /// OWNER/REPO
        full_name: String,
    },
    /// Show the remaining GitHub API quota
    RateLimit,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn emit_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run(commands: CommandLine, config: &Config) -> anyhow::Result<()> {
    let client = GitHubClient::from_config(config).context("Failed to create GitHub client")?;
    let json = commands.json;

    match commands.command {
        Commands::Search {
            query,
            page,
            per_page,
        } => {
            let outcome = explorer::search_users(&client, &query, page, per_page).await?;
            if json {
                return emit_json(&outcome);
            }
            print::search(&query, &outcome);
        }
        Commands::User { login } => {
            let profile = explorer::load_profile(&client, &login, REPOS_PAGE_SIZE).await?;
            if json {
                return emit_json(&profile);
            }
            print::profile(&profile);
        }
        Commands::Repos {
            login,
            sort,
            language,
            limit,
        } => {
            let repositories = client
                .list_user_repositories(&login, 1, REPOS_PAGE_SIZE)
                .await?;
            let mut arranged = arrange_repositories(&repositories, sort, language.as_deref());
            if let Some(limit) = limit {
                arranged.truncate(limit);
            }
            if json {
                return emit_json(&arranged);
            }
            print::repositories(&arranged);
        }
        Commands::Repo { full_name, commits } => {
            let (owner, repo) = parse_full_name(&full_name)?;
            let details = explorer::load_repository(&client, owner, repo, commits).await?;
            if json {
                return emit_json(&details);
            }
            print::repository(&details, &language_breakdown(&details.languages));
        }
        Commands::ReviewProfile { login } => {
            let profile = explorer::load_profile(&client, &login, REPOS_PAGE_SIZE).await?;
            let service = ReviewService::from_config(config)?;
            print::status(&format!("Reviewing {login}..."));
            let result = service
                .review_profile(&profile.user, &profile.repositories)
                .await;
            if json {
                return emit_json(&result);
            }
            print::review(&result);
        }
        Commands::ReviewRepo { full_name } => {
            let (owner, repo) = parse_full_name(&full_name)?;
            let repository = client.get_repository(owner, repo).await?;
            let service = ReviewService::from_config(config)?;
            print::status(&format!("Reviewing {full_name}..."));
            let result = service.review_repository(&repository).await;
            if json {
                return emit_json(&result);
            }
            print::review(&result);
        }
        Commands::RateLimit => {
            let status = client.rate_limit().await?;
            if json {
                return emit_json(&status);
            }
            print::rate_limit(&status);
        }
    }

    Ok(())
}
