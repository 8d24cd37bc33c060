//! Domain layer containing the document model and quality logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (state machine trait, errors)
//! - `document` - Structured document model, parsing and rendering
//! - `quality` - Text extraction, quality rules and the auditor
//! - `generation` - Briefs, prompts, attempts and the pipeline state machine

pub mod document;
pub mod foundation;
pub mod generation;
pub mod quality;
