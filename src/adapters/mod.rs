//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text generators (OpenAI, scripted mock)

pub mod ai;

pub use ai::{MockTextGenerator, OpenAiGenerator, OpenAiGeneratorConfig};
