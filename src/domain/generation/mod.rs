//! Generation module - what the repair pipeline asks the generator for.
//!
//! # Organization
//!
//! - `brief` - The caller's validated brief
//! - `reference_bank` - Authors, institutions and journals offered to the generator
//! - `prompts` - Initial and repair prompt construction
//! - `attempt` - Per-attempt bookkeeping and best-attempt ranking
//! - `state` - Pipeline state machine

mod attempt;
mod brief;
mod prompts;
mod reference_bank;
mod state;

pub use attempt::{keep_best, GenerationAttempt};
pub use brief::GenerationBrief;
pub use prompts::{excerpt, PromptBuilder, REPAIR_EXCERPT_CHARS};
pub use reference_bank::{AuthorReference, ReferenceBank, ReferenceCluster};
pub use state::PipelineState;
