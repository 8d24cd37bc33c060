//! The caller's brief for one generated document.

use serde::Serialize;

use crate::domain::document::Tone;
use crate::domain::foundation::ValidationError;

/// What to write about, for whom, and in which voice.
///
/// The pipeline never interprets these strings; they are passed through to
/// the prompts. Construction rejects blank fields, so a brief in hand is
/// always usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationBrief {
    topic: String,
    audience: String,
    goal: String,
    tone: Tone,
    author: String,
}

impl GenerationBrief {
    /// Creates a brief, trimming every field.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` for the first blank field.
    pub fn new(
        topic: impl Into<String>,
        audience: impl Into<String>,
        goal: impl Into<String>,
        tone: Tone,
        author: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            topic: required("topic", topic.into())?,
            audience: required("audience", audience.into())?,
            goal: required("goal", goal.into())?,
            tone,
            author: required("author", author.into())?,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

fn required(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}
