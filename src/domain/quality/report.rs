//! Audit reports.

use serde::{Deserialize, Serialize};

use super::rules::RuleKind;

/// Per-rule pass/fail, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCheck {
    pub rule: RuleKind,
    pub passed: bool,
}

/// Measurements of one content section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMetric {
    pub title: String,
    pub word_count: usize,
    pub block_count: usize,
}

/// Raw numbers behind a report, for display without re-deriving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaMetrics {
    pub total_words: usize,
    /// Number of content sections.
    pub section_count: usize,
    pub sections: Vec<SectionMetric>,
    pub citations_found: Vec<String>,
    pub forbidden_terms_found: Vec<String>,
}

/// Outcome of a quality audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaReport {
    /// True iff every rule passed.
    pub approved: bool,
    /// Every failing rule's details, in rule order. Empty iff approved.
    pub problems: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<String>,
    #[serde(default)]
    pub checks: Vec<RuleCheck>,
    pub metrics: QaMetrics,
}

impl QaReport {
    /// Synthetic report for an attempt that never reached the rules.
    pub fn unparseable(reason: impl Into<String>) -> Self {
        Self {
            approved: false,
            problems: vec![reason.into()],
            advisories: Vec::new(),
            checks: Vec::new(),
            metrics: QaMetrics::default(),
        }
    }

    pub fn problem_count(&self) -> usize {
        self.problems.len()
    }
}
