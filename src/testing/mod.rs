//! Testing utilities for octoscope.
//!
//! Provides a mock GitHub client, a mock review provider and payload
//! fixtures for testing code built on this crate.

pub mod fixtures;
mod mock;

pub use mock::{MockCall, MockGitHubClient, MockResponse, MockReviewProvider};
