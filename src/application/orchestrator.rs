//! RepairOrchestrator - bounded generate, parse, audit, repair loop.
//!
//! One invocation runs at most `max_attempts` generation calls, strictly in
//! sequence, and always returns a [`PipelineResult`]. Generator failures,
//! timeouts and unparseable output each consume one attempt and feed the
//! next repair prompt; nothing escapes the loop as an error.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::{AppConfig, ValidationError as ConfigValidationError};
use crate::domain::document::{parse_and_validate, render_markdown, Document};
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::generation::{
    keep_best, GenerationAttempt, GenerationBrief, PipelineState, PromptBuilder, ReferenceBank,
};
use crate::domain::quality::{QaReport, QualityAuditor, QualityPolicy};
use crate::ports::{GenerationFailure, GenerationPrompt, TextGenerator};

/// Total generation attempts allowed per invocation. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxAttempts(u32);

impl MaxAttempts {
    /// # Errors
    ///
    /// Returns `OutOfRange` for zero.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range(
                "max_attempts",
                1,
                u64::from(u32::MAX),
                0,
            ));
        }
        Ok(Self(value))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for MaxAttempts {
    /// One initial attempt plus two repairs.
    fn default() -> Self {
        Self(3)
    }
}

/// Attempt budget and per-attempt timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub max_attempts: MaxAttempts,
    /// Window for a single generator call; elapsed counts as a failed attempt.
    pub attempt_timeout: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_attempts: MaxAttempts::default(),
            attempt_timeout: Duration::from_secs(120),
        }
    }
}

impl PipelineSettings {
    pub fn new(max_attempts: MaxAttempts, attempt_timeout: Duration) -> Self {
        Self {
            max_attempts,
            attempt_timeout,
        }
    }
}

/// What an invocation returns. Never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// The approved document, or the best one seen. `None` only if no
    /// attempt ever produced a parseable document.
    pub document: Option<Document>,
    /// Report of the returned attempt.
    pub report: QaReport,
    /// Generation calls made.
    pub attempts_used: u32,
    /// True iff `report.approved` is false: usable, but flag for human review.
    pub warning: bool,
    /// Ordinal of the attempt whose document and report are returned.
    pub best_attempt: u32,
}

impl PipelineResult {
    fn from_attempt(attempt: GenerationAttempt, attempts_used: u32) -> Self {
        Self {
            warning: !attempt.report.approved,
            best_attempt: attempt.number,
            document: attempt.document,
            report: attempt.report,
            attempts_used,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.report.approved
    }

    /// Markdown preview of the returned document.
    pub fn markdown(&self) -> Option<String> {
        self.document.as_ref().map(render_markdown)
    }
}

/// Drives one document through generation, audit and repair.
///
/// Holds only immutable configuration, so a single orchestrator can serve
/// many concurrent invocations.
#[derive(Debug)]
pub struct RepairOrchestrator {
    auditor: QualityAuditor,
    prompts: PromptBuilder,
    settings: PipelineSettings,
}

impl RepairOrchestrator {
    /// Orchestrator with the standard rules and reference bank.
    pub fn new(policy: QualityPolicy, settings: PipelineSettings) -> Self {
        Self {
            auditor: QualityAuditor::new(&policy),
            prompts: PromptBuilder::new(policy, ReferenceBank::default()),
            settings,
        }
    }

    /// Orchestrator with explicit components.
    pub fn with_components(
        auditor: QualityAuditor,
        prompts: PromptBuilder,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            auditor,
            prompts,
            settings,
        }
    }

    /// Builds an orchestrator from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid pipeline or quality setting.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigValidationError> {
        config.pipeline.validate()?;
        config.quality.validate()?;

        let max_attempts = MaxAttempts::new(config.pipeline.max_attempts).map_err(|_| {
            ConfigValidationError::InvalidMaxAttempts {
                max: crate::config::MAX_CONFIGURED_ATTEMPTS,
            }
        })?;
        let settings = PipelineSettings::new(max_attempts, config.pipeline.attempt_timeout());

        Ok(Self::new(config.quality.policy(), settings))
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Runs the pipeline for `brief` against `generator`.
    pub async fn invoke(
        &self,
        brief: &GenerationBrief,
        generator: &dyn TextGenerator,
    ) -> PipelineResult {
        let span = tracing::info_span!(
            "pipeline",
            run_id = %Uuid::new_v4(),
            generator = generator.name(),
            max_attempts = self.settings.max_attempts.get(),
        );
        self.run(brief, generator).instrument(span).await
    }

    async fn run(&self, brief: &GenerationBrief, generator: &dyn TextGenerator) -> PipelineResult {
        let max_attempts = self.settings.max_attempts.get();
        let mut prompt = self.prompts.initial(brief);
        let mut best: Option<GenerationAttempt> = None;
        let mut state = PipelineState::Generating;

        for number in 1..=max_attempts {
            let attempt = self.attempt(number, &prompt, generator, &mut state).await;

            if attempt.is_approved() {
                advance(&mut state, PipelineState::Approved);
                tracing::info!(attempt = number, "Document approved");
                return PipelineResult::from_attempt(attempt, number);
            }

            tracing::warn!(
                attempt = number,
                problems = attempt.report.problem_count(),
                "Attempt rejected"
            );

            if number < max_attempts {
                advance(&mut state, PipelineState::Retrying);
                let previous = attempt
                    .document
                    .as_ref()
                    .or_else(|| best.as_ref().and_then(|b| b.document.as_ref()));
                prompt = self
                    .prompts
                    .repair(brief, &attempt.report.problems, previous);
                advance(&mut state, PipelineState::Generating);
            } else {
                advance(&mut state, PipelineState::Exhausted);
            }

            best = Some(keep_best(best, attempt));
        }

        let result = match best {
            Some(best) => PipelineResult::from_attempt(best, max_attempts),
            None => PipelineResult {
                document: None,
                report: QaReport::unparseable("No generation attempt was made"),
                attempts_used: 0,
                warning: true,
                best_attempt: 0,
            },
        };

        tracing::warn!(
            attempts_used = result.attempts_used,
            best_attempt = result.best_attempt,
            problems = result.report.problem_count(),
            has_document = result.document.is_some(),
            "Attempt budget exhausted, returning best attempt"
        );
        result
    }

    /// Generates, parses and audits once. Leaves `state` at the last
    /// stage reached.
    async fn attempt(
        &self,
        number: u32,
        prompt: &GenerationPrompt,
        generator: &dyn TextGenerator,
        state: &mut PipelineState,
    ) -> GenerationAttempt {
        tracing::debug!(attempt = number, "Requesting generation");

        let raw = match timeout(self.settings.attempt_timeout, generator.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationFailure::timeout(self.settings.attempt_timeout)),
        };

        let raw = match raw {
            Ok(raw) => raw,
            Err(failure) => {
                tracing::warn!(
                    attempt = number,
                    error = %failure,
                    retryable = failure.is_retryable(),
                    "Generation failed"
                );
                return GenerationAttempt::new(
                    number,
                    None,
                    QaReport::unparseable(format!("Generation failed: {}", failure)),
                );
            }
        };

        advance(state, PipelineState::Parsing);
        let document = match parse_and_validate(&raw) {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(attempt = number, error = %err, "Structured output rejected");
                return GenerationAttempt::new(
                    number,
                    None,
                    QaReport::unparseable(format!("Could not parse structured output: {}", err)),
                );
            }
        };

        advance(state, PipelineState::Auditing);
        let report = self.auditor.audit(&document);
        tracing::debug!(
            attempt = number,
            approved = report.approved,
            total_words = report.metrics.total_words,
            sections = report.metrics.section_count,
            citations = report.metrics.citations_found.len(),
            "Audit complete"
        );

        GenerationAttempt::new(number, Some(document), report)
    }
}

/// Moves the pipeline to `next`, logging the transition.
fn advance(state: &mut PipelineState, next: PipelineState) {
    match state.transition_to(next) {
        Ok(reached) => {
            tracing::debug!(from = ?*state, to = ?reached, "Pipeline transition");
            *state = reached;
        }
        Err(err) => {
            tracing::error!(error = %err, "Unexpected pipeline transition");
            *state = next;
        }
    }
}
