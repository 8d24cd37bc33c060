//! Plain-text extraction for quality analysis.
//!
//! Flattens a validated document into whole-document text plus one entry per
//! section, so rules can measure both without re-walking the structure.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::document::{Block, Document, Section};

/// Kind of section a [`SectionText`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Content,
    Image,
}

/// Flattened text of one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionText {
    /// Index in `Document::sections`.
    pub position: usize,
    pub kind: SectionKind,
    /// Section title; image sections have none.
    pub title: Option<String>,
    /// Block text of a content section, space-joined. Empty for other kinds.
    pub body: String,
    pub word_count: usize,
    pub block_count: usize,
}

/// Flattened text of a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatText {
    /// Meta titles, section titles and block text in document order.
    pub whole: String,
    /// Lowercased `whole`, for case-insensitive term search.
    pub whole_lower: String,
    pub sections: Vec<SectionText>,
}

impl FlatText {
    /// Word count of the whole document text.
    pub fn total_words(&self) -> usize {
        count_words(&self.whole)
    }

    /// Content sections only, in document order.
    pub fn content_sections(&self) -> impl Iterator<Item = &SectionText> {
        self.sections
            .iter()
            .filter(|s| s.kind == SectionKind::Content)
    }

    /// Returns every distinct term that occurs in the document, case-insensitively.
    ///
    /// Terms are reported in their given spelling, in the given order. Entries
    /// that differ only in case count once, under their first spelling.
    pub fn find_terms<'a, I>(&self, terms: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut seen = HashSet::new();
        terms
            .into_iter()
            .filter(|term| {
                let folded = term.trim().to_lowercase();
                self.whole_lower.contains(&folded) && seen.insert(folded)
            })
            .cloned()
            .collect()
    }
}

/// Number of whitespace-separated tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Flattens a document. Pure: the same document always yields the same text.
pub fn flatten(document: &Document) -> FlatText {
    let mut whole: Vec<&str> = Vec::new();
    let mut sections = Vec::with_capacity(document.sections.len());

    whole.push(&document.meta.title);
    if let Some(subtitle) = &document.meta.subtitle {
        whole.push(subtitle);
    }

    for (position, section) in document.sections.iter().enumerate() {
        match section {
            Section::Hero(hero) => {
                whole.push(&hero.title);
                if let Some(subtitle) = &hero.subtitle {
                    whole.push(subtitle);
                }
                sections.push(SectionText {
                    position,
                    kind: SectionKind::Hero,
                    title: Some(hero.title.clone()),
                    body: String::new(),
                    word_count: 0,
                    block_count: 0,
                });
            }
            Section::Content(content) => {
                whole.push(&content.title);
                let mut parts: Vec<&str> = Vec::new();
                for block in &content.blocks {
                    block_text(block, &mut parts);
                }
                whole.extend(parts.iter().copied());

                let body = parts.join(" ");
                sections.push(SectionText {
                    position,
                    kind: SectionKind::Content,
                    title: Some(content.title.clone()),
                    word_count: count_words(&body),
                    body,
                    block_count: content.blocks.len(),
                });
            }
            Section::Image(_) => {
                sections.push(SectionText {
                    position,
                    kind: SectionKind::Image,
                    title: None,
                    body: String::new(),
                    word_count: 0,
                    block_count: 0,
                });
            }
        }
    }

    let whole = whole.join(" ");
    FlatText {
        whole_lower: whole.to_lowercase(),
        whole,
        sections,
    }
}

fn block_text<'a>(block: &'a Block, parts: &mut Vec<&'a str>) {
    match block {
        Block::Paragraph { text } | Block::Callout { text, .. } => parts.push(text),
        Block::BulletList { items } => parts.extend(items.iter().map(String::as_str)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{
        CalloutStyle, ContentSection, DocumentMeta, HeroSection, ImageSection, ImageStyle, Tone,
    };
    use proptest::prelude::*;

    fn document() -> Document {
        Document {
            meta: DocumentMeta {
                title: "Meta Title".to_string(),
                subtitle: Some("Meta Sub".to_string()),
                author: "Author Name".to_string(),
                tone: Tone::Educational,
                audience: "Audience".to_string(),
                goal: "Goal".to_string(),
            },
            sections: vec![
                Section::Hero(HeroSection {
                    title: "Hero Title".to_string(),
                    subtitle: Some("Hero Sub".to_string()),
                }),
                Section::Content(ContentSection {
                    title: "Chapter One".to_string(),
                    blocks: vec![
                        Block::Paragraph {
                            text: "alpha beta gamma".to_string(),
                        },
                        Block::BulletList {
                            items: vec!["delta epsilon".to_string(), "zeta".to_string()],
                        },
                        Block::Callout {
                            style: CalloutStyle::Highlight,
                            text: "Kahneman eta".to_string(),
                        },
                    ],
                }),
                Section::Image(ImageSection {
                    prompt: "hidden prompt words".to_string(),
                    style: ImageStyle::Full,
                    url: None,
                }),
            ],
        }
    }

    #[test]
    fn whole_text_follows_document_order() {
        let flat = flatten(&document());
        assert_eq!(
            flat.whole,
            "Meta Title Meta Sub Hero Title Hero Sub Chapter One alpha beta gamma delta epsilon zeta Kahneman eta"
        );
        assert_eq!(flat.whole_lower, flat.whole.to_lowercase());
    }

    #[test]
    fn image_prompts_are_excluded() {
        let flat = flatten(&document());
        assert!(!flat.whole.contains("hidden"));
    }

    #[test]
    fn content_section_body_excludes_title() {
        let flat = flatten(&document());
        let chapter = flat.content_sections().next().unwrap();
        assert_eq!(chapter.position, 1);
        assert_eq!(chapter.title.as_deref(), Some("Chapter One"));
        assert_eq!(chapter.body, "alpha beta gamma delta epsilon zeta Kahneman eta");
        assert_eq!(chapter.word_count, 8);
        assert_eq!(chapter.block_count, 3);
    }

    #[test]
    fn every_section_is_tagged() {
        let flat = flatten(&document());
        let kinds: Vec<_> = flat.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Hero, SectionKind::Content, SectionKind::Image]
        );
    }

    #[test]
    fn find_terms_is_case_insensitive_and_keeps_spelling() {
        let flat = flatten(&document());
        let terms = vec!["KAHNEMAN".to_string(), "thaler".to_string(), "Zeta".to_string()];
        assert_eq!(flat.find_terms(&terms), vec!["KAHNEMAN", "Zeta"]);
    }

    #[test]
    fn find_terms_counts_case_variants_once() {
        let flat = flatten(&document());
        let terms = vec![
            "Kahneman".to_string(),
            "kahneman".to_string(),
            "KAHNEMAN".to_string(),
        ];
        assert_eq!(flat.find_terms(&terms), vec!["Kahneman"]);
    }

    #[test]
    fn count_words_splits_on_any_whitespace() {
        assert_eq!(count_words("  one\ttwo\n three  "), 3);
        assert_eq!(count_words(""), 0);
    }

    proptest! {
        #[test]
        fn section_word_count_matches_generated_words(words in proptest::collection::vec("[a-z]{1,8}", 1..200)) {
            let mut doc = document();
            doc.sections[1] = Section::Content(ContentSection {
                title: "T".to_string(),
                blocks: vec![Block::Paragraph { text: words.join(" ") }],
            });
            let flat = flatten(&doc);
            prop_assert_eq!(flat.content_sections().next().unwrap().word_count, words.len());
        }

        #[test]
        fn flatten_is_deterministic(text in "[a-zA-Z ]{1,200}") {
            let mut doc = document();
            doc.meta.goal = text;
            prop_assert_eq!(flatten(&doc), flatten(&doc));
        }
    }
}
