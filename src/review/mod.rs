//! AI-written reviews of profiles and repositories.
//!
//! [`ReviewService`] tries each configured [`ReviewProvider`] in order,
//! spacing requests with a [`RequestThrottle`], and falls back to the
//! deterministic templates in [`demo`] when none succeeds or when demo mode
//! is on.

pub mod demo;
pub mod prompts;
pub mod providers;
pub mod service;
pub mod throttle;

// Re-exports
pub use providers::{GeminiProvider, MistralProvider, ReviewProvider};
pub use service::{
    ProviderFailure, ReviewResult, ReviewService, ReviewSubject, DEMO_PROVIDER, FALLBACK_NOTICE,
    FALLBACK_PROVIDER,
};
pub use throttle::RequestThrottle;
