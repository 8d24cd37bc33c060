//! Editorial Gate - Structured long-form content generation with a quality gate
//!
//! A language model drafts a structured document, a deterministic rule set
//! audits it, and a bounded repair loop re-prompts with the exact problems
//! found until the document passes or the attempt budget runs out.
//!
//! # Example
//!
//! ```no_run
//! use editorial_gate::adapters::{OpenAiGenerator, OpenAiGeneratorConfig};
//! use editorial_gate::application::{PipelineSettings, RepairOrchestrator};
//! use editorial_gate::domain::document::Tone;
//! use editorial_gate::domain::generation::GenerationBrief;
//! use editorial_gate::domain::quality::QualityPolicy;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = OpenAiGenerator::new(OpenAiGeneratorConfig::new("sk-..."))?;
//! let orchestrator = RepairOrchestrator::new(QualityPolicy::default(), PipelineSettings::default());
//! let brief = GenerationBrief::new(
//!     "Pricing psychology",
//!     "Small business owners",
//!     "Price with confidence",
//!     Tone::Educational,
//!     "Editorial Team",
//! )?;
//!
//! let result = orchestrator.invoke(&brief, &generator).await;
//! if result.warning {
//!     println!("Needs review: {:?}", result.report.problems);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
