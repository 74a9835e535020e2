//! Data model types mirroring GitHub REST payloads.

pub mod commits;
pub mod repos;
pub mod users;

// Re-exports
pub use commits::{Commit, CommitAccount, CommitDetail, Signature};
pub use repos::{Languages, License, Owner, Repository};
pub use users::{SearchUsersResponse, User, UserSummary};
