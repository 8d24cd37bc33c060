//! Readable Markdown rendition of a document.
//!
//! Used for previews and for the excerpt embedded in repair prompts. Not a
//! layout engine: PDF/HTML rendering lives downstream.

use super::model::{Block, CalloutStyle, Document, Section};

/// Renders a document as Markdown.
pub fn render_markdown(document: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();
    let meta = &document.meta;

    lines.push(format!("# {}", meta.title));
    if let Some(subtitle) = &meta.subtitle {
        lines.push(format!("## {}", subtitle));
    }
    lines.push(String::new());
    lines.push(format!("**Author:** {}", meta.author));
    lines.push(format!("**Audience:** {}", meta.audience));
    lines.push(format!("**Goal:** {}", meta.goal));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    for section in &document.sections {
        match section {
            Section::Hero(hero) => {
                lines.push(format!("# {}", hero.title));
                if let Some(subtitle) = &hero.subtitle {
                    lines.push(format!("### {}", subtitle));
                }
                lines.push(String::new());
            }
            Section::Content(content) => {
                lines.push(format!("## {}", content.title));
                lines.push(String::new());
                for block in &content.blocks {
                    render_block(block, &mut lines);
                    lines.push(String::new());
                }
                lines.push("---".to_string());
                lines.push(String::new());
            }
            Section::Image(image) => {
                lines.push(format!("*[Image: {}]*", image.prompt));
                lines.push(String::new());
            }
        }
    }

    lines.join("\n")
}

fn render_block(block: &Block, lines: &mut Vec<String>) {
    match block {
        Block::Paragraph { text } => lines.push(text.clone()),
        Block::BulletList { items } => {
            lines.extend(items.iter().map(|item| format!("- {}", item)));
        }
        Block::Callout { style, text } => {
            lines.push(format!("> **{}:** {}", callout_label(*style), text));
        }
    }
}

fn callout_label(style: CalloutStyle) -> &'static str {
    match style {
        CalloutStyle::Highlight => "Highlight",
        CalloutStyle::Tip => "Tip",
        CalloutStyle::Warning => "Warning",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{
        ContentSection, DocumentMeta, HeroSection, ImageSection, ImageStyle, Tone,
    };

    fn document() -> Document {
        Document {
            meta: DocumentMeta {
                title: "Choice Architecture".to_string(),
                subtitle: Some("A field guide".to_string()),
                author: "Editorial Team".to_string(),
                tone: Tone::Storytelling,
                audience: "Founders".to_string(),
                goal: "Teach nudges".to_string(),
            },
            sections: vec![
                Section::Hero(HeroSection {
                    title: "Choice Architecture".to_string(),
                    subtitle: None,
                }),
                Section::Content(ContentSection {
                    title: "Defaults".to_string(),
                    blocks: vec![
                        Block::Paragraph {
                            text: "Thaler and Sunstein show defaults matter.".to_string(),
                        },
                        Block::BulletList {
                            items: vec!["Opt-out".to_string(), "Opt-in".to_string()],
                        },
                        Block::Callout {
                            style: CalloutStyle::Warning,
                            text: "Defaults are never neutral.".to_string(),
                        },
                    ],
                }),
                Section::Image(ImageSection {
                    prompt: "Two doors".to_string(),
                    style: ImageStyle::Inline,
                    url: None,
                }),
            ],
        }
    }

    #[test]
    fn renders_meta_header() {
        let md = render_markdown(&document());
        assert!(md.starts_with("# Choice Architecture\n## A field guide\n"));
        assert!(md.contains("**Author:** Editorial Team"));
        assert!(md.contains("**Audience:** Founders"));
    }

    #[test]
    fn renders_blocks_in_order() {
        let md = render_markdown(&document());
        let paragraph = md.find("Thaler and Sunstein").unwrap();
        let bullet = md.find("- Opt-out").unwrap();
        let callout = md.find("> **Warning:** Defaults are never neutral.").unwrap();
        assert!(paragraph < bullet && bullet < callout);
    }

    #[test]
    fn renders_image_placeholder() {
        let md = render_markdown(&document());
        assert!(md.contains("*[Image: Two doors]*"));
    }
}
