//! Bookkeeping for one generation attempt.

use crate::domain::document::Document;
use crate::domain::quality::QaReport;

/// One attempt: the parsed document (if any) and its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationAttempt {
    /// 1-based attempt ordinal.
    pub number: u32,
    /// `None` when generation or parsing failed.
    pub document: Option<Document>,
    pub report: QaReport,
}

impl GenerationAttempt {
    pub fn new(number: u32, document: Option<Document>, report: QaReport) -> Self {
        Self {
            number,
            document,
            report,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.report.approved
    }

    /// True if this attempt should replace `other` as the best so far.
    ///
    /// A parsed document beats none, approved beats unapproved, then fewer
    /// problems wins. Ties keep `other`, so the earlier attempt survives.
    pub fn outranks(&self, other: &GenerationAttempt) -> bool {
        self.rank_key() > other.rank_key()
    }

    fn rank_key(&self) -> (bool, bool, std::cmp::Reverse<usize>) {
        (
            self.document.is_some(),
            self.report.approved,
            std::cmp::Reverse(self.report.problem_count()),
        )
    }
}

/// Keeps the better of the current best and a new attempt.
pub fn keep_best(best: Option<GenerationAttempt>, candidate: GenerationAttempt) -> GenerationAttempt {
    match best {
        Some(best) if !candidate.outranks(&best) => best,
        _ => candidate,
    }
}
