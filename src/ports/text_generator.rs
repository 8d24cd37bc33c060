//! Text Generator Port - Interface for the model that writes documents.
//!
//! The repair pipeline only needs one thing from a language model: given a
//! self-contained instruction, return raw text. This port abstracts that so
//! the pipeline can run against OpenAI, another provider, or a scripted fake.
//!
//! # Design
//!
//! - Stateless from the caller's view: every prompt restates all context,
//!   implementations must not rely on prior calls
//! - No retries or backoff inside implementations; the orchestrator owns
//!   the attempt budget
//! - Errors classify common provider failures
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoGenerator;
//!
//! #[async_trait]
//! impl TextGenerator for EchoGenerator {
//!     async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, GenerationFailure> {
//!         Ok(prompt.user.clone())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "echo"
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Port for text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates raw text for a prompt.
    ///
    /// The output is expected (but not trusted) to be a JSON document.
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, GenerationFailure>;

    /// Short identifier used in logs (e.g. "openai", "mock").
    fn name(&self) -> &str;
}

/// A complete, self-contained instruction for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPrompt {
    /// Editorial rules, reference bank and output schema.
    pub system: String,
    /// The brief, or the brief plus the problems to repair.
    pub user: String,
}

impl GenerationPrompt {
    /// Creates a new prompt.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Text generation failures.
///
/// Every variant costs the pipeline one attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationFailure {
    /// No response within the attempt window.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout, in milliseconds.
        timeout_ms: u64,
    },

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key rejected or missing.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Provider answered with something that is not a completion.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Provider returned no text.
    #[error("empty response")]
    EmptyResponse,
}

impl GenerationFailure {
    /// Creates a timeout failure.
    pub fn timeout(window: Duration) -> Self {
        Self::Timeout {
            timeout_ms: u64::try_from(window.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Creates a rate limited failure.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable failure.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an invalid response failure.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Returns true if the same request might succeed later.
    ///
    /// Informational: the orchestrator spends an attempt on every failure.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationFailure::Timeout { .. }
                | GenerationFailure::RateLimited { .. }
                | GenerationFailure::Unavailable { .. }
                | GenerationFailure::Network(_)
                | GenerationFailure::EmptyResponse
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_constructor_works() {
        let prompt = GenerationPrompt::new("system rules", "write about defaults");
        assert_eq!(prompt.system, "system rules");
        assert_eq!(prompt.user, "write about defaults");
    }

    #[test]
    fn failure_constructors_work() {
        assert!(matches!(
            GenerationFailure::timeout(Duration::from_secs(60)),
            GenerationFailure::Timeout { timeout_ms: 60_000 }
        ));
        assert!(matches!(
            GenerationFailure::rate_limited(30),
            GenerationFailure::RateLimited {
                retry_after_secs: 30
            }
        ));
        assert!(matches!(
            GenerationFailure::unavailable("down"),
            GenerationFailure::Unavailable { .. }
        ));
    }

    #[test]
    fn failure_retryable_classification() {
        assert!(GenerationFailure::timeout(Duration::from_secs(60)).is_retryable());
        assert!(GenerationFailure::rate_limited(30).is_retryable());
        assert!(GenerationFailure::unavailable("down").is_retryable());
        assert!(GenerationFailure::network("reset").is_retryable());
        assert!(GenerationFailure::EmptyResponse.is_retryable());

        assert!(!GenerationFailure::AuthenticationFailed.is_retryable());
        assert!(!GenerationFailure::invalid_response("html").is_retryable());
    }

    #[test]
    fn failure_messages_are_readable() {
        assert_eq!(
            GenerationFailure::timeout(Duration::from_secs(120)).to_string(),
            "request timed out after 120000ms"
        );
        assert_eq!(
            GenerationFailure::timeout(Duration::from_millis(50)).to_string(),
            "request timed out after 50ms"
        );
        assert_eq!(GenerationFailure::EmptyResponse.to_string(), "empty response");
    }
}
