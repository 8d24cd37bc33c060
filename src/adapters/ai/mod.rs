//! Text Generator Adapters.
//!
//! Implementations of the TextGenerator port.
//!
//! ## Available Adapters
//!
//! - `MockTextGenerator` - Scripted generator for testing
//! - `OpenAiGenerator` - OpenAI chat completions (GPT-4o by default)

mod mock_generator;
mod openai_generator;

pub use mock_generator::{MockResponse, MockTextGenerator, EXHAUSTED_SCRIPT_RESPONSE};
pub use openai_generator::{OpenAiGenerator, OpenAiGeneratorConfig};
