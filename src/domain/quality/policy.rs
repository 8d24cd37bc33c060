//! Quality thresholds and term lists.
//!
//! Every number and list the rules use lives here so it can be tuned from
//! configuration without touching rule code.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Default deny-list of hype and vacuous motivational phrasing.
pub const DEFAULT_FORBIDDEN_TERMS: &[&str] = &[
    "believe in yourself",
    "all it takes is wanting it",
    "the secret is",
    "magic formula",
    "guaranteed results",
    "make money",
    "get rich",
    "guaranteed success",
    "foolproof method",
    "100% proven",
    "revolutionary",
    "transform your life",
    "millions of dollars",
    "easy money",
    "without any effort",
];

/// Default recognized authority names and sources (matched case-insensitively).
pub const DEFAULT_CITATION_SOURCES: &[&str] = &[
    "kahneman",
    "tversky",
    "ariely",
    "thaler",
    "damasio",
    "ledoux",
    "zak",
    "cialdini",
    "fogg",
    "eyal",
    "kotler",
    "godin",
    "sinek",
    "harvard",
    "mckinsey",
    "mit sloan",
];

/// Policy validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Quality threshold '{0}' must be greater than zero")]
    ZeroThreshold(&'static str),

    #[error("Target maximum words ({max}) is below the minimum ({min})")]
    TargetBelowMinimum { min: usize, max: usize },

    #[error("Term list '{0}' must not be empty")]
    EmptyList(&'static str),

    #[error("Term list '{0}' contains a blank entry")]
    BlankTerm(&'static str),

    #[error("Term list '{list}' repeats '{term}'")]
    DuplicateTerm { list: &'static str, term: String },

    #[error("Citation minimum ({minimum}) exceeds the {available} configured sources")]
    UnreachableCitationMinimum { minimum: usize, available: usize },
}

/// Thresholds and term lists for the quality rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityPolicy {
    pub min_content_sections: usize,
    pub min_words_per_section: usize,
    /// Soft ceiling; exceeding it yields an advisory, never a problem.
    pub target_max_words_per_section: usize,
    pub min_blocks_per_section: usize,
    pub min_citations: usize,
    pub forbidden_terms: Vec<String>,
    pub citation_sources: Vec<String>,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self {
            min_content_sections: 6,
            min_words_per_section: 600,
            target_max_words_per_section: 900,
            min_blocks_per_section: 5,
            min_citations: 3,
            forbidden_terms: to_owned(DEFAULT_FORBIDDEN_TERMS),
            citation_sources: to_owned(DEFAULT_CITATION_SOURCES),
        }
    }
}

impl QualityPolicy {
    /// Validates thresholds and lists.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let minimums = [
            ("min_content_sections", self.min_content_sections),
            ("min_words_per_section", self.min_words_per_section),
            ("min_blocks_per_section", self.min_blocks_per_section),
            ("min_citations", self.min_citations),
        ];
        for (name, value) in minimums {
            if value == 0 {
                return Err(PolicyError::ZeroThreshold(name));
            }
        }

        if self.target_max_words_per_section < self.min_words_per_section {
            return Err(PolicyError::TargetBelowMinimum {
                min: self.min_words_per_section,
                max: self.target_max_words_per_section,
            });
        }

        check_terms("forbidden_terms", &self.forbidden_terms)?;
        check_terms("citation_sources", &self.citation_sources)?;

        if self.min_citations > self.citation_sources.len() {
            return Err(PolicyError::UnreachableCitationMinimum {
                minimum: self.min_citations,
                available: self.citation_sources.len(),
            });
        }

        Ok(())
    }
}

fn check_terms(name: &'static str, terms: &[String]) -> Result<(), PolicyError> {
    if terms.is_empty() {
        return Err(PolicyError::EmptyList(name));
    }
    if terms.iter().any(|t| t.trim().is_empty()) {
        return Err(PolicyError::BlankTerm(name));
    }
    let mut seen = HashSet::new();
    for term in terms {
        let folded = term.trim().to_lowercase();
        if !seen.insert(folded) {
            return Err(PolicyError::DuplicateTerm {
                list: name,
                term: term.clone(),
            });
        }
    }
    Ok(())
}

fn to_owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_thresholds() {
        let policy = QualityPolicy::default();
        assert_eq!(policy.min_content_sections, 6);
        assert_eq!(policy.min_words_per_section, 600);
        assert_eq!(policy.target_max_words_per_section, 900);
        assert_eq!(policy.min_blocks_per_section, 5);
        assert_eq!(policy.min_citations, 3);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let policy = QualityPolicy {
            min_blocks_per_section: 0,
            ..Default::default()
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::ZeroThreshold("min_blocks_per_section"))
        );
    }

    #[test]
    fn target_below_minimum_is_rejected() {
        let policy = QualityPolicy {
            target_max_words_per_section: 500,
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::TargetBelowMinimum { min: 600, max: 500 })
        ));
    }

    #[test]
    fn blank_terms_are_rejected() {
        let policy = QualityPolicy {
            forbidden_terms: vec!["ok".to_string(), " ".to_string()],
            ..Default::default()
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::BlankTerm("forbidden_terms"))
        );
    }

    #[test]
    fn empty_source_list_is_rejected() {
        let policy = QualityPolicy {
            citation_sources: vec![],
            ..Default::default()
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::EmptyList("citation_sources"))
        );
    }

    #[test]
    fn case_variant_duplicates_are_rejected() {
        let policy = QualityPolicy {
            citation_sources: vec![
                "kahneman".to_string(),
                "kahneman".to_string(),
                "Kahneman".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(
            policy.validate(),
            Err(PolicyError::DuplicateTerm {
                list: "citation_sources",
                term: "kahneman".to_string(),
            })
        );

        let policy = QualityPolicy {
            forbidden_terms: vec!["get rich".to_string(), " Get Rich".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::DuplicateTerm {
                list: "forbidden_terms",
                ..
            })
        ));
    }

    #[test]
    fn unreachable_citation_minimum_is_rejected() {
        let policy = QualityPolicy {
            citation_sources: vec!["kahneman".to_string(), "thaler".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(PolicyError::UnreachableCitationMinimum {
                minimum: 3,
                available: 2
            })
        ));
    }
}
