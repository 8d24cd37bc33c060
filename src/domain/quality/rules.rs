//! Deterministic quality rules.
//!
//! Each rule is a pure check over a document and its flattened text. Rules
//! never short-circuit each other; the auditor runs all of them so a report
//! lists every violation.

use serde::{Deserialize, Serialize};

use crate::domain::document::Document;

use super::extractor::FlatText;
use super::policy::QualityPolicy;

/// Identifies a rule in reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    MinSectionCount,
    MinWordsPerSection,
    MinBlocksPerSection,
    ForbiddenTerms,
    MinCitations,
    /// A rule supplied by the embedding application.
    Custom(String),
}

/// Outcome of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    pub rule: RuleKind,
    pub passed: bool,
    /// One human-readable description per violation. Empty iff `passed`.
    pub details: Vec<String>,
    /// Soft signals that do not fail the rule.
    pub advisories: Vec<String>,
    /// Terms the rule matched (citations found, forbidden terms found).
    pub matches: Vec<String>,
}

impl RuleResult {
    /// Builds a result; the rule passes iff there are no details.
    pub fn from_details(rule: RuleKind, details: Vec<String>) -> Self {
        Self {
            rule,
            passed: details.is_empty(),
            details,
            advisories: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// A passing result.
    pub fn pass(rule: RuleKind) -> Self {
        Self::from_details(rule, Vec::new())
    }

    pub fn with_matches(mut self, matches: Vec<String>) -> Self {
        self.matches = matches;
        self
    }

    pub fn with_advisories(mut self, advisories: Vec<String>) -> Self {
        self.advisories = advisories;
        self
    }
}

/// A pluggable quality check.
///
/// Implementations must be pure: no I/O, no interior state, the same input
/// always yields the same result.
pub trait QualityRule: Send + Sync {
    /// Which rule this is.
    fn kind(&self) -> RuleKind;

    /// Evaluates the rule against a document and its flattened text.
    fn evaluate(&self, document: &Document, text: &FlatText) -> RuleResult;
}

/// The five standard rules, configured from a policy, in report order.
pub fn standard_rules(policy: &QualityPolicy) -> Vec<Box<dyn QualityRule>> {
    vec![
        Box::new(MinSectionCount {
            minimum: policy.min_content_sections,
        }),
        Box::new(MinWordsPerSection {
            minimum: policy.min_words_per_section,
            target_max: policy.target_max_words_per_section,
        }),
        Box::new(MinBlocksPerSection {
            minimum: policy.min_blocks_per_section,
        }),
        Box::new(ForbiddenTerms {
            terms: policy.forbidden_terms.clone(),
        }),
        Box::new(MinCitations {
            sources: policy.citation_sources.clone(),
            minimum: policy.min_citations,
        }),
    ]
}

/// Document must have at least `minimum` content sections.
#[derive(Debug, Clone)]
pub struct MinSectionCount {
    pub minimum: usize,
}

impl QualityRule for MinSectionCount {
    fn kind(&self) -> RuleKind {
        RuleKind::MinSectionCount
    }

    fn evaluate(&self, document: &Document, _text: &FlatText) -> RuleResult {
        let count = document.content_section_count();
        if count >= self.minimum {
            return RuleResult::pass(self.kind());
        }
        RuleResult::from_details(
            self.kind(),
            vec![format!(
                "Document has only {} content sections (minimum: {})",
                count, self.minimum
            )],
        )
    }
}

/// Every content section must reach `minimum` words.
///
/// `target_max` is advisory only.
#[derive(Debug, Clone)]
pub struct MinWordsPerSection {
    pub minimum: usize,
    pub target_max: usize,
}

impl QualityRule for MinWordsPerSection {
    fn kind(&self) -> RuleKind {
        RuleKind::MinWordsPerSection
    }

    fn evaluate(&self, _document: &Document, text: &FlatText) -> RuleResult {
        let mut details = Vec::new();
        let mut advisories = Vec::new();

        for section in text.content_sections() {
            let title = section_label(section.title.as_deref(), section.position);
            if section.word_count < self.minimum {
                details.push(format!(
                    "Section '{}' has {} words (minimum: {}, short by {})",
                    title,
                    section.word_count,
                    self.minimum,
                    self.minimum - section.word_count
                ));
            } else if section.word_count > self.target_max {
                advisories.push(format!(
                    "Section '{}' has {} words (target maximum: {})",
                    title, section.word_count, self.target_max
                ));
            }
        }

        RuleResult::from_details(self.kind(), details).with_advisories(advisories)
    }
}

/// Every content section must have at least `minimum` blocks.
#[derive(Debug, Clone)]
pub struct MinBlocksPerSection {
    pub minimum: usize,
}

impl QualityRule for MinBlocksPerSection {
    fn kind(&self) -> RuleKind {
        RuleKind::MinBlocksPerSection
    }

    fn evaluate(&self, _document: &Document, text: &FlatText) -> RuleResult {
        let details = text
            .content_sections()
            .filter(|s| s.block_count < self.minimum)
            .map(|s| {
                format!(
                    "Section '{}' has {} blocks (minimum: {})",
                    section_label(s.title.as_deref(), s.position),
                    s.block_count,
                    self.minimum
                )
            })
            .collect();

        RuleResult::from_details(self.kind(), details)
    }
}

/// No deny-listed phrase may appear anywhere in the document.
#[derive(Debug, Clone)]
pub struct ForbiddenTerms {
    pub terms: Vec<String>,
}

impl QualityRule for ForbiddenTerms {
    fn kind(&self) -> RuleKind {
        RuleKind::ForbiddenTerms
    }

    fn evaluate(&self, _document: &Document, text: &FlatText) -> RuleResult {
        let found = text.find_terms(&self.terms);
        let details = if found.is_empty() {
            Vec::new()
        } else {
            vec![format!("Forbidden terms found: {}", found.join(", "))]
        };

        RuleResult::from_details(self.kind(), details).with_matches(found)
    }
}

/// At least `minimum` distinct recognized sources must be cited.
#[derive(Debug, Clone)]
pub struct MinCitations {
    pub sources: Vec<String>,
    pub minimum: usize,
}

impl QualityRule for MinCitations {
    fn kind(&self) -> RuleKind {
        RuleKind::MinCitations
    }

    fn evaluate(&self, _document: &Document, text: &FlatText) -> RuleResult {
        let found = text.find_terms(&self.sources);
        let details = if found.len() >= self.minimum {
            Vec::new()
        } else if found.is_empty() {
            vec![format!(
                "Too few references found (0). Minimum: {} distinct authors or sources",
                self.minimum
            )]
        } else {
            vec![format!(
                "Too few references found ({}: {}). Minimum: {} distinct authors or sources",
                found.len(),
                found.join(", "),
                self.minimum
            )]
        };

        RuleResult::from_details(self.kind(), details).with_matches(found)
    }
}

fn section_label(title: Option<&str>, position: usize) -> String {
    match title {
        Some(title) => title.to_string(),
        None => format!("sections[{}]", position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{Block, ContentSection, DocumentMeta, Section, Tone};
    use crate::domain::quality::extractor::flatten;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn chapter(title: &str, word_count: usize, blocks: usize) -> Section {
        let mut content = vec![Block::Paragraph {
            text: words(word_count),
        }];
        for _ in 1..blocks {
            content.push(Block::BulletList {
                items: vec!["-".to_string()],
            });
        }
        Section::Content(ContentSection {
            title: title.to_string(),
            blocks: content,
        })
    }

    fn doc(sections: Vec<Section>) -> Document {
        Document {
            meta: DocumentMeta {
                title: "Title".to_string(),
                subtitle: None,
                author: "Author".to_string(),
                tone: Tone::Educational,
                audience: "Audience".to_string(),
                goal: "Goal".to_string(),
            },
            sections,
        }
    }

    fn run(rule: &dyn QualityRule, document: &Document) -> RuleResult {
        rule.evaluate(document, &flatten(document))
    }

    #[test]
    fn section_count_fails_below_minimum_with_actual_count() {
        let document = doc(vec![chapter("A", 10, 1), chapter("B", 10, 1)]);
        let result = run(&MinSectionCount { minimum: 6 }, &document);
        assert!(!result.passed);
        assert_eq!(
            result.details,
            vec!["Document has only 2 content sections (minimum: 6)"]
        );
    }

    #[test]
    fn section_count_passes_at_minimum() {
        let document = doc((0..6).map(|i| chapter(&i.to_string(), 1, 1)).collect());
        assert!(run(&MinSectionCount { minimum: 6 }, &document).passed);
    }

    #[test]
    fn short_section_is_named_with_shortfall() {
        let document = doc(vec![chapter("Long", 650, 1), chapter("Short", 400, 1)]);
        let rule = MinWordsPerSection {
            minimum: 600,
            target_max: 900,
        };
        let result = run(&rule, &document);
        assert!(!result.passed);
        assert_eq!(
            result.details,
            vec!["Section 'Short' has 400 words (minimum: 600, short by 200)"]
        );
    }

    #[test]
    fn long_section_is_advisory_only() {
        let document = doc(vec![chapter("Long", 950, 1)]);
        let rule = MinWordsPerSection {
            minimum: 600,
            target_max: 900,
        };
        let result = run(&rule, &document);
        assert!(result.passed);
        assert_eq!(
            result.advisories,
            vec!["Section 'Long' has 950 words (target maximum: 900)"]
        );
    }

    #[test]
    fn each_thin_section_gets_its_own_detail() {
        let document = doc(vec![
            chapter("A", 10, 2),
            chapter("B", 10, 5),
            chapter("C", 10, 4),
        ]);
        let result = run(&MinBlocksPerSection { minimum: 5 }, &document);
        assert_eq!(
            result.details,
            vec![
                "Section 'A' has 2 blocks (minimum: 5)",
                "Section 'C' has 4 blocks (minimum: 5)"
            ]
        );
    }

    #[test]
    fn forbidden_terms_lists_every_match() {
        let mut document = doc(vec![chapter("A", 1, 1)]);
        document.meta.title = "The Magic Formula to GET RICH".to_string();
        let rule = ForbiddenTerms {
            terms: vec![
                "magic formula".to_string(),
                "easy money".to_string(),
                "get rich".to_string(),
            ],
        };
        let result = run(&rule, &document);
        assert!(!result.passed);
        assert_eq!(result.matches, vec!["magic formula", "get rich"]);
        assert_eq!(
            result.details,
            vec!["Forbidden terms found: magic formula, get rich"]
        );
    }

    #[test]
    fn citations_need_distinct_sources() {
        let sources: Vec<String> = ["kahneman", "thaler", "cialdini"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rule = MinCitations {
            sources,
            minimum: 3,
        };

        let mut document = doc(vec![chapter("A", 1, 1)]);
        document.meta.title = "Kahneman, Kahneman and Thaler".to_string();
        let result = run(&rule, &document);
        assert!(!result.passed);
        assert_eq!(result.matches, vec!["kahneman", "thaler"]);
        assert_eq!(
            result.details,
            vec!["Too few references found (2: kahneman, thaler). Minimum: 3 distinct authors or sources"]
        );

        document.meta.subtitle = Some("with Cialdini".to_string());
        let result = run(&rule, &document);
        assert!(result.passed);
        assert!(result.details.is_empty());
    }

    #[test]
    fn repeated_source_entries_count_as_one_citation() {
        let rule = MinCitations {
            sources: vec![
                "kahneman".to_string(),
                "kahneman".to_string(),
                "Kahneman".to_string(),
            ],
            minimum: 3,
        };

        let mut document = doc(vec![chapter("A", 1, 1)]);
        document.meta.subtitle = Some("Notes on Kahneman".to_string());
        let result = run(&rule, &document);
        assert!(!result.passed);
        assert_eq!(result.matches, vec!["kahneman"]);
        assert_eq!(
            result.details,
            vec!["Too few references found (1: kahneman). Minimum: 3 distinct authors or sources"]
        );
    }

    #[test]
    fn zero_citations_detail_has_no_list() {
        let rule = MinCitations {
            sources: vec!["kahneman".to_string()],
            minimum: 1,
        };
        let result = run(&rule, &doc(vec![chapter("A", 1, 1)]));
        assert_eq!(
            result.details,
            vec!["Too few references found (0). Minimum: 1 distinct authors or sources"]
        );
    }

    #[test]
    fn standard_rules_follow_report_order() {
        let kinds: Vec<_> = standard_rules(&QualityPolicy::default())
            .iter()
            .map(|r| r.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::MinSectionCount,
                RuleKind::MinWordsPerSection,
                RuleKind::MinBlocksPerSection,
                RuleKind::ForbiddenTerms,
                RuleKind::MinCitations,
            ]
        );
    }
}
