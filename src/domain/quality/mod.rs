//! Quality module - the deterministic gate a document must pass.
//!
//! # Organization
//!
//! - `extractor` - Flattening a document into analyzable text
//! - `policy` - Thresholds and term lists
//! - `rules` - The `QualityRule` trait and the standard rules
//! - `report` - Audit report and metrics
//! - `auditor` - Runs every rule and aggregates the report

mod auditor;
mod extractor;
mod policy;
mod report;
mod rules;

pub use auditor::QualityAuditor;
pub use extractor::{count_words, flatten, FlatText, SectionKind, SectionText};
pub use policy::{PolicyError, QualityPolicy, DEFAULT_CITATION_SOURCES, DEFAULT_FORBIDDEN_TERMS};
pub use report::{QaMetrics, QaReport, RuleCheck, SectionMetric};
pub use rules::{
    standard_rules, ForbiddenTerms, MinBlocksPerSection, MinCitations, MinSectionCount,
    MinWordsPerSection, QualityRule, RuleKind, RuleResult,
};
