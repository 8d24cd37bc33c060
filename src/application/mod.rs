//! Application layer - orchestration of domain services and ports.
//!
//! - `orchestrator` - The bounded generate, audit, repair loop
//! - `telemetry` - Tracing subscriber setup

mod orchestrator;
mod telemetry;

pub use orchestrator::{MaxAttempts, PipelineResult, PipelineSettings, RepairOrchestrator};
pub use telemetry::{init_tracing, TelemetryError};
