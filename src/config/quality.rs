//! Quality gate configuration
//!
//! Every field overrides the matching default of [`QualityPolicy`]. Term
//! lists are comma-separated so they fit in a single environment variable.

use serde::Deserialize;

use crate::domain::quality::QualityPolicy;

use super::error::ValidationError;

/// Quality gate overrides
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QualityConfig {
    pub min_content_sections: Option<usize>,
    pub min_words_per_section: Option<usize>,
    pub target_max_words_per_section: Option<usize>,
    pub min_blocks_per_section: Option<usize>,
    pub min_citations: Option<usize>,

    /// Forbidden phrases (comma-separated), replaces the default list
    pub forbidden_terms: Option<String>,

    /// Recognized citation sources (comma-separated), replaces the default list
    pub citation_sources: Option<String>,
}

impl QualityConfig {
    /// Builds the effective policy: defaults with overrides applied.
    pub fn policy(&self) -> QualityPolicy {
        let defaults = QualityPolicy::default();
        QualityPolicy {
            min_content_sections: self
                .min_content_sections
                .unwrap_or(defaults.min_content_sections),
            min_words_per_section: self
                .min_words_per_section
                .unwrap_or(defaults.min_words_per_section),
            target_max_words_per_section: self
                .target_max_words_per_section
                .unwrap_or(defaults.target_max_words_per_section),
            min_blocks_per_section: self
                .min_blocks_per_section
                .unwrap_or(defaults.min_blocks_per_section),
            min_citations: self.min_citations.unwrap_or(defaults.min_citations),
            forbidden_terms: split_list(self.forbidden_terms.as_deref())
                .unwrap_or(defaults.forbidden_terms),
            citation_sources: split_list(self.citation_sources.as_deref())
                .unwrap_or(defaults.citation_sources),
        }
    }

    /// Validate the effective policy
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.policy().validate()?;
        Ok(())
    }
}

fn split_list(raw: Option<&str>) -> Option<Vec<String>> {
    raw.map(|s| {
        s.split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quality::PolicyError;

    #[test]
    fn test_empty_config_yields_default_policy() {
        assert_eq!(QualityConfig::default().policy(), QualityPolicy::default());
    }

    #[test]
    fn test_overrides_apply() {
        let config = QualityConfig {
            min_words_per_section: Some(400),
            citation_sources: Some("kahneman, thaler ,cialdini".to_string()),
            ..Default::default()
        };
        let policy = config.policy();
        assert_eq!(policy.min_words_per_section, 400);
        assert_eq!(policy.min_content_sections, 6);
        assert_eq!(policy.citation_sources, vec!["kahneman", "thaler", "cialdini"]);
    }

    #[test]
    fn test_empty_list_override_is_rejected() {
        let config = QualityConfig {
            forbidden_terms: Some(" , ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidQualityPolicy(PolicyError::EmptyList(
                "forbidden_terms"
            )))
        );
    }

    #[test]
    fn test_repeated_citation_source_is_rejected() {
        let config = QualityConfig {
            citation_sources: Some("kahneman,kahneman,Kahneman".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidQualityPolicy(
                PolicyError::DuplicateTerm { .. }
            ))
        ));
    }
}
