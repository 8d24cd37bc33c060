//! QualityAuditor - runs every rule and aggregates a report.

use crate::domain::document::Document;

use super::extractor::{flatten, FlatText};
use super::policy::QualityPolicy;
use super::report::{QaMetrics, QaReport, RuleCheck, SectionMetric};
use super::rules::{standard_rules, QualityRule, RuleKind, RuleResult};

/// Deterministic quality gate.
///
/// Holds only immutable rules, so one auditor can be shared across
/// concurrent pipeline invocations.
pub struct QualityAuditor {
    rules: Vec<Box<dyn QualityRule>>,
}

impl QualityAuditor {
    /// Auditor with the five standard rules configured from `policy`.
    pub fn new(policy: &QualityPolicy) -> Self {
        Self::with_rules(standard_rules(policy))
    }

    /// Auditor with a custom rule set, evaluated in the given order.
    pub fn with_rules(rules: Vec<Box<dyn QualityRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Audits a document. Every rule runs; none short-circuits another.
    pub fn audit(&self, document: &Document) -> QaReport {
        let text = flatten(document);
        let results: Vec<RuleResult> = self
            .rules
            .iter()
            .map(|rule| rule.evaluate(document, &text))
            .collect();

        let problems: Vec<String> = results
            .iter()
            .flat_map(|r| r.details.iter().cloned())
            .collect();
        let advisories = results
            .iter()
            .flat_map(|r| r.advisories.iter().cloned())
            .collect();
        let checks = results
            .iter()
            .map(|r| RuleCheck {
                rule: r.rule.clone(),
                passed: r.passed,
            })
            .collect();

        QaReport {
            approved: problems.is_empty(),
            problems,
            advisories,
            checks,
            metrics: metrics(&text, &results),
        }
    }
}

impl Default for QualityAuditor {
    fn default() -> Self {
        Self::new(&QualityPolicy::default())
    }
}

impl std::fmt::Debug for QualityAuditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kinds: Vec<RuleKind> = self.rules.iter().map(|r| r.kind()).collect();
        f.debug_struct("QualityAuditor").field("rules", &kinds).finish()
    }
}

fn metrics(text: &FlatText, results: &[RuleResult]) -> QaMetrics {
    let matches_of = |kind: RuleKind| {
        results
            .iter()
            .find(|r| r.rule == kind)
            .map(|r| r.matches.clone())
            .unwrap_or_default()
    };

    let sections: Vec<SectionMetric> = text
        .content_sections()
        .map(|s| SectionMetric {
            title: s.title.clone().unwrap_or_default(),
            word_count: s.word_count,
            block_count: s.block_count,
        })
        .collect();

    QaMetrics {
        total_words: text.total_words(),
        section_count: sections.len(),
        sections,
        citations_found: matches_of(RuleKind::MinCitations),
        forbidden_terms_found: matches_of(RuleKind::ForbiddenTerms),
    }
}
