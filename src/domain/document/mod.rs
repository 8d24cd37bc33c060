//! Document module - the structured artifact produced by generation.
//!
//! # Organization
//!
//! - `model` - Document, meta, sections and blocks (serde tagged enums)
//! - `schema` - Parsing raw generator output into a validated document
//! - `response` - Recovering the JSON payload from fenced or chatty output
//! - `render` - Markdown preview

mod model;
mod render;
mod response;
mod schema;

pub use model::{
    Block, CalloutStyle, ContentSection, Document, DocumentMeta, HeroSection, ImageSection,
    ImageStyle, Section, Tone,
};
pub use render::render_markdown;
pub use response::{extract_json_payload, MAX_RAW_LENGTH};
pub use schema::{parse_and_validate, validate, SchemaError};
