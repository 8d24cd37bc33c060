//! Structured document model.
//!
//! A document is metadata plus an ordered list of typed sections. Content
//! sections hold an ordered list of typed blocks. The serde representation
//! uses the `type` tag strings shared with downstream renderers and storage.

use serde::{Deserialize, Serialize};

/// Root artifact produced by generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub meta: DocumentMeta,
    /// Presentation order is insertion order.
    pub sections: Vec<Section>,
}

impl Document {
    /// Iterates over content sections in document order.
    pub fn content_sections(&self) -> impl Iterator<Item = &ContentSection> {
        self.sections.iter().filter_map(Section::as_content)
    }

    /// Number of content sections (chapters).
    pub fn content_section_count(&self) -> usize {
        self.content_sections().count()
    }
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub author: String,
    pub tone: Tone,
    pub audience: String,
    pub goal: String,
}

/// Editorial tone of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Educational,
    Persuasive,
    Storytelling,
}

impl Tone {
    /// Wire name of the tone.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Educational => "educational",
            Tone::Persuasive => "persuasive",
            Tone::Storytelling => "storytelling",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Section {
    /// Opening banner. Conventionally first, not enforced.
    #[serde(rename = "hero")]
    Hero(HeroSection),

    /// A chapter of blocks.
    #[serde(rename = "section")]
    Content(ContentSection),

    /// An illustration slot.
    #[serde(rename = "image")]
    Image(ImageSection),
}

impl Section {
    /// Returns the content section if this is one.
    pub fn as_content(&self) -> Option<&ContentSection> {
        match self {
            Section::Content(section) => Some(section),
            _ => None,
        }
    }

    /// Wire tag of the section.
    pub fn tag(&self) -> &'static str {
        match self {
            Section::Hero(_) => "hero",
            Section::Content(_) => "section",
            Section::Image(_) => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSection {
    /// Prompt for the image generator.
    pub prompt: String,
    pub style: ImageStyle,
    /// Resolved image location, filled in after image generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Placement of an image section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Full,
    Inline,
}

/// A typed unit of a content section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    BulletList { items: Vec<String> },
    Callout { style: CalloutStyle, text: String },
}

impl Block {
    /// Wire tag of the block.
    pub fn tag(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::BulletList { .. } => "bullet_list",
            Block::Callout { .. } => "callout",
        }
    }
}

/// Visual emphasis of a callout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutStyle {
    Highlight,
    Tip,
    Warning,
}
