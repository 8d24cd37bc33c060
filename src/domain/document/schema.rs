//! Document schema validation.
//!
//! Turns raw generator output into a [`Document`] or rejects it outright.
//! Validation is structural: tags, required fields, non-empty collections.
//! Text quality is the auditor's concern.

use serde_json::Value;
use thiserror::Error;

use super::model::{Block, Document, Section};
use super::response::{extract_json_payload, MAX_RAW_LENGTH};

/// Reasons raw text is not a valid document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Output too large: {actual} bytes exceeds maximum of {max} bytes")]
    TooLarge { max: usize, actual: usize },

    #[error("Output is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Output does not match the document shape: {0}")]
    Shape(String),

    #[error("Document has no sections")]
    NoSections,

    #[error("Content section at sections[{section}] has no blocks")]
    EmptyBlocks { section: usize },

    #[error("Bullet list at sections[{section}].blocks[{block}] has no items")]
    EmptyBulletList { section: usize, block: usize },

    #[error("Required field '{path}' is empty")]
    EmptyField { path: String },
}

/// Parses raw generator output into a validated document.
///
/// # Errors
///
/// Returns `SchemaError` when the text is oversized, is not JSON, does not
/// match the document shape, or violates a structural minimum. No partial
/// document is ever returned.
pub fn parse_and_validate(raw: &str) -> Result<Document, SchemaError> {
    if raw.len() > MAX_RAW_LENGTH {
        return Err(SchemaError::TooLarge {
            max: MAX_RAW_LENGTH,
            actual: raw.len(),
        });
    }

    let payload = extract_json_payload(raw);
    let value: Value =
        serde_json::from_str(payload).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;

    let document: Document =
        serde_json::from_value(value).map_err(|e| SchemaError::Shape(e.to_string()))?;

    validate(&document)?;
    Ok(document)
}

/// Checks the structural minimums serde cannot express.
pub fn validate(document: &Document) -> Result<(), SchemaError> {
    let meta = &document.meta;
    require_text(&meta.title, || "meta.title".to_string())?;
    require_text(&meta.author, || "meta.author".to_string())?;
    require_text(&meta.audience, || "meta.audience".to_string())?;
    require_text(&meta.goal, || "meta.goal".to_string())?;

    if document.sections.is_empty() {
        return Err(SchemaError::NoSections);
    }

    for (index, section) in document.sections.iter().enumerate() {
        match section {
            Section::Hero(hero) => {
                require_text(&hero.title, || format!("sections[{}].title", index))?;
            }
            Section::Content(content) => {
                require_text(&content.title, || format!("sections[{}].title", index))?;
                if content.blocks.is_empty() {
                    return Err(SchemaError::EmptyBlocks { section: index });
                }
                for (block_index, block) in content.blocks.iter().enumerate() {
                    validate_block(block, index, block_index)?;
                }
            }
            Section::Image(image) => {
                require_text(&image.prompt, || format!("sections[{}].prompt", index))?;
            }
        }
    }

    Ok(())
}

fn validate_block(block: &Block, section: usize, index: usize) -> Result<(), SchemaError> {
    match block {
        Block::Paragraph { text } | Block::Callout { text, .. } => require_text(text, || {
            format!("sections[{}].blocks[{}].text", section, index)
        }),
        Block::BulletList { items } => {
            if items.is_empty() {
                Err(SchemaError::EmptyBulletList {
                    section,
                    block: index,
                })
            } else {
                Ok(())
            }
        }
    }
}

fn require_text(value: &str, path: impl FnOnce() -> String) -> Result<(), SchemaError> {
    if value.trim().is_empty() {
        Err(SchemaError::EmptyField { path: path() })
    } else {
        Ok(())
    }
}
