//! Octoscope
//!
//! Explore GitHub users and repositories, and get AI-written reviews of
//! profiles and projects.
//!
//! # Quick Start
//!
//! ```no_run
//! use octoscope::{explorer, GitHubClient};
//!
//! # async fn run() -> Result<(), octoscope::Error> {
//! let client = GitHubClient::new(None, None, None, None)?;
//! let outcome = explorer::search_users(&client, "octocat", 1, 10).await?;
//! for user in outcome.users {
//!     println!("{}", user.login);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod explorer;
pub mod format;
pub mod listing;
pub mod review;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use client::{GitHubApi, GitHubClient};
pub use clients::{ReposClient, UsersClient};
pub use config::{Config, ConfigError};
pub use error::{Error, GitHubError, ReviewError};
pub use explorer::{Profile, RepositoryDetails, SearchOutcome};
pub use listing::{LanguageShare, RepoSort};
pub use review::{
    GeminiProvider, MistralProvider, ProviderFailure, RequestThrottle, ReviewProvider,
    ReviewResult, ReviewService, ReviewSubject,
};
pub use transport::{HttpTransport, RateLimitStatus, RetryConfig};
pub use types::{
    Commit, CommitAccount, CommitDetail, Languages, License, Owner, Repository,
    SearchUsersResponse, Signature, User, UserSummary,
};
