//! Resource clients for the GitHub REST API.

pub mod repos;
pub mod users;

// Re-exports
pub use repos::ReposClient;
pub use users::UsersClient;
