//! policyscan-llm — upstream language-model collaborator.
//!
//! The upstream service is optional and untrusted: every call goes through a
//! bounded [`RetryPolicy`], every reply is parsed defensively, and any
//! failure is reported as an [`LlmError`] for the caller to fall back on.

pub mod audit;
pub mod backend;
pub mod parse;
pub mod prompt;
pub mod retry;
pub mod upstream;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use backend::{GeminiBackend, LlmBackend, LlmError, LlmRequest, LlmResponse};
pub use retry::{RetryOutcome, RetryPolicy};
pub use upstream::{GenerationSettings, UpstreamClient};
