//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Generation Ports
//!
//! - `TextGenerator` - The language model that writes documents

mod text_generator;

pub use text_generator::{GenerationFailure, GenerationPrompt, TextGenerator};
