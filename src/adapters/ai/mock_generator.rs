//! Mock Text Generator for testing.
//!
//! Provides a scripted implementation of the TextGenerator port, allowing
//! pipeline tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Scripted responses consumed in order
//! - Failure injection for resilience testing
//! - Simulated delays for timeout testing
//! - Prompt recording for verification
//!
//! # Example
//!
//! ```ignore
//! let generator = MockTextGenerator::new()
//!     .with_failure(GenerationFailure::rate_limited(5))
//!     .with_response(valid_json);
//!
//! let result = orchestrator.invoke(&brief, &generator).await;
//! assert_eq!(generator.call_count(), 2);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{GenerationFailure, GenerationPrompt, TextGenerator};

/// Text returned once the script runs out. Never parses as a document.
pub const EXHAUSTED_SCRIPT_RESPONSE: &str = "Mock response";

/// A scripted generator outcome.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this raw text.
    Text(String),
    /// Fail with this error.
    Failure(GenerationFailure),
    /// Sleep for the duration, then return the text.
    Delayed(Duration, String),
}

/// Mock text generator for testing.
///
/// Clones share the script and the call history.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Simulated latency applied to every call.
    delay: Duration,
    /// Prompts received, in call order.
    calls: Arc<Mutex<Vec<GenerationPrompt>>>,
}

impl MockTextGenerator {
    /// Creates a new mock generator with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw text response to the script.
    pub fn with_response(self, raw: impl Into<String>) -> Self {
        self.push(MockResponse::Text(raw.into()))
    }

    /// Adds a failure to the script.
    pub fn with_failure(self, failure: GenerationFailure) -> Self {
        self.push(MockResponse::Failure(failure))
    }

    /// Adds a response that arrives only after `delay`.
    pub fn with_delayed_response(self, delay: Duration, raw: impl Into<String>) -> Self {
        self.push(MockResponse::Delayed(delay, raw.into()))
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this generator.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns every prompt received, in call order.
    pub fn prompts(&self) -> Vec<GenerationPrompt> {
        lock(&self.calls).clone()
    }

    /// Returns the number of scripted responses not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.responses).len()
    }

    fn push(self, response: MockResponse) -> Self {
        lock(&self.responses).push_back(response);
        self
    }

    fn next_response(&self) -> MockResponse {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Text(EXHAUSTED_SCRIPT_RESPONSE.to_string()))
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, GenerationFailure> {
        lock(&self.calls).push(prompt.clone());
        let response = self.next_response();

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match response {
            MockResponse::Text(raw) => Ok(raw),
            MockResponse::Failure(failure) => Err(failure),
            MockResponse::Delayed(delay, raw) => {
                sleep(delay).await;
                Ok(raw)
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Locks a mutex, recovering the data if a panicking test poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
