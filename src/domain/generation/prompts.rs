//! Prompt construction for the initial and repair generation calls.
//!
//! The generator keeps no memory between calls, so every prompt restates
//! the full brief, the editorial rules and the output schema.

use crate::domain::document::{render_markdown, Document};
use crate::domain::quality::QualityPolicy;
use crate::ports::GenerationPrompt;

use super::brief::GenerationBrief;
use super::reference_bank::ReferenceBank;

/// Maximum characters of the previous document quoted in a repair prompt.
pub const REPAIR_EXCERPT_CHARS: usize = 3000;

const RULE: &str =
    "===============================================================================";

const OUTPUT_SCHEMA: &str = r#"{
  "meta": {
    "title": "string",
    "subtitle": "string",
    "author": "string",
    "tone": "educational | persuasive | storytelling",
    "audience": "string",
    "goal": "string"
  },
  "sections": [
    { "type": "hero", "title": "string", "subtitle": "string" },
    {
      "type": "section",
      "title": "CHAPTER X - TITLE",
      "blocks": [
        { "type": "paragraph", "text": "Dense paragraph of four to six lines explaining a concept, not just asserting it." },
        { "type": "paragraph", "text": "Second paragraph developing the argument with a specific author." },
        { "type": "callout", "style": "highlight", "text": "Direct quote or statistic with its source." },
        { "type": "paragraph", "text": "Third paragraph explaining the psychological mechanism." },
        { "type": "bullet_list", "items": ["Point one, explained", "Point two, explained", "Point three, explained"] },
        { "type": "paragraph", "text": "Transition to the next concept or chapter." }
      ]
    },
    { "type": "image", "prompt": "string", "style": "full | inline" }
  ]
}"#;

/// The fixed chapter plan every initial prompt asks for.
const CHAPTER_PLAN: &[(&str, &str, &[&str])] = &[
    (
        "THE STRUCTURAL PROBLEM",
        "Define the core problem the audience faces",
        &[
            "Give historical or scientific context",
            "Explain why superficial fixes fail",
            "Cite Kahneman (biases), Ariely (irrationality) or Thaler (nudges)",
        ],
    ),
    (
        "HOW DECISIONS REALLY HAPPEN",
        "Explain the cognitive and emotional mechanisms",
        &[
            "Describe Kahneman's System 1 and System 2",
            "Explain Damasio's somatic markers",
            "Connect neuroscience to everyday behavior",
        ],
    ),
    (
        "THE MOST COMMON MISTAKE",
        "Analyze recurring errors and mistaken beliefs",
        &[
            "Identify the most frequent biases in this context",
            "Cite studies from the Journal of Consumer Research",
            "Explain the mechanism of the error, cause then effect",
        ],
    ),
    (
        "A NEW PERSPECTIVE",
        "Present a change of paradigm",
        &[
            "Use BJ Fogg's Behavior Model (B=MAP)",
            "Apply Cialdini's principles where relevant",
            "Build a logical argument on evidence",
        ],
    ),
    (
        "PRACTICAL APPLICATION",
        "Turn theory into action",
        &[
            "Give steps the reader can apply immediately",
            "Use universal, repeatable examples",
            "Ground each step in an established framework",
        ],
    ),
    (
        "CONSISTENCY AND LONG-TERM VISION",
        "Establish a long-term mindset",
        &[
            "Explain why results come from consistency",
            "Cite trends from McKinsey, HBR or MIT Sloan",
            "Close with a strategic vision, without empty promises",
        ],
    ),
    (
        "REFERENCES AND FURTHER READING",
        "Show a solid intellectual foundation",
        &[
            "List every book and author cited",
            "Include the journals and institutions mentioned",
            "Group by category: books, articles, studies",
        ],
    ),
];

/// Builds generation prompts from a brief and the active quality policy.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    policy: QualityPolicy,
    bank: ReferenceBank,
}

impl PromptBuilder {
    pub fn new(policy: QualityPolicy, bank: ReferenceBank) -> Self {
        Self { policy, bank }
    }

    pub fn policy(&self) -> &QualityPolicy {
        &self.policy
    }

    /// Prompt for the first attempt.
    pub fn initial(&self, brief: &GenerationBrief) -> GenerationPrompt {
        let mut user = String::new();
        push_banner(&mut user, "DOCUMENT BRIEF");
        push_brief(&mut user, brief);
        user.push('\n');

        push_banner(
            &mut user,
            &format!("REQUIRED STRUCTURE: {} CHAPTERS", CHAPTER_PLAN.len()),
        );
        for (index, (title, objective, points)) in CHAPTER_PLAN.iter().enumerate() {
            user.push_str(&format!("CHAPTER {} - {}\n", index + 1, title));
            user.push_str(&format!("Objective: {}\n", objective));
            for point in points.iter() {
                user.push_str(&format!("- {}\n", point));
            }
            user.push_str(&format!(
                "- At least {} blocks, {}-{} words\n\n",
                self.policy.min_blocks_per_section,
                self.policy.min_words_per_section,
                self.policy.target_max_words_per_section
            ));
        }

        push_banner(&mut user, "PRE-DELIVERY CHECK");
        user.push_str("Before answering, confirm that:\n");
        user.push_str("1. The content teaches something beyond the obvious.\n");
        user.push_str("2. Every concept explains its mechanism.\n");
        user.push_str("3. Every chapter cites recognized authors or sources.\n");
        user.push_str(&format!(
            "4. Every chapter has at least {} words and {} blocks.\n",
            self.policy.min_words_per_section, self.policy.min_blocks_per_section
        ));
        user.push_str("5. There is no motivational filler and no empty promise.\n");
        user.push_str("If any answer is no, rewrite before answering.\n\n");
        user.push_str("Respond ONLY with the valid JSON.");

        GenerationPrompt::new(self.system_prompt(), user)
    }

    /// Prompt for a repair attempt.
    ///
    /// Restates the brief, lists every problem verbatim and quotes the
    /// previous document when one was parsed.
    pub fn repair(
        &self,
        brief: &GenerationBrief,
        problems: &[String],
        previous: Option<&Document>,
    ) -> GenerationPrompt {
        let mut user = String::new();
        push_banner(&mut user, "MANDATORY REWRITE: QUALITY REVIEW REJECTED THE DRAFT");
        user.push_str("The previous draft was rejected by quality control.\n\n");
        push_brief(&mut user, brief);
        user.push('\n');

        user.push_str("PROBLEMS FOUND:\n");
        for problem in problems {
            user.push_str(&format!("- {}\n", problem));
        }
        user.push('\n');

        push_banner(&mut user, "REQUIRED ACTIONS");
        user.push_str(&format!(
            "1. Expand every chapter below {} words\n",
            self.policy.min_words_per_section
        ));
        user.push_str(&format!(
            "2. Give every chapter at least {} blocks\n",
            self.policy.min_blocks_per_section
        ));
        user.push_str(&format!(
            "3. Cite at least {} distinct recognized authors or sources (Kahneman, Cialdini, Damasio, ...)\n",
            self.policy.min_citations
        ));
        user.push_str("4. Explain the psychological mechanisms behind each idea\n");
        user.push_str("5. Remove generic or empty phrasing\n");
        user.push_str("6. Keep a logical progression between sections\n");
        user.push_str("7. Preserve everything that already passed\n\n");

        match previous {
            Some(document) => {
                user.push_str("CURRENT DRAFT FOR REVISION:\n");
                user.push_str(&excerpt(&render_markdown(document), REPAIR_EXCERPT_CHARS));
                user.push_str("\n\n");
            }
            None => {
                user.push_str(
                    "The previous response could not be used. Produce the full document from scratch.\n\n",
                );
            }
        }

        push_banner(&mut user, "REWRITE THE COMPLETE DOCUMENT FIXING EVERY PROBLEM");
        user.push_str("Respond ONLY with the corrected valid JSON.");

        GenerationPrompt::new(self.system_prompt(), user)
    }

    fn system_prompt(&self) -> String {
        let policy = &self.policy;
        let mut system = String::new();

        push_banner(&mut system, "EDITORIAL STANDARD");
        system.push_str(
            "You are a senior editor-in-chief with a background in applied neuroscience, \
             behavioral psychology, ethical marketing and international editorial writing.\n\
             You never produce generic, shallow, motivational or inflated content.\n\n",
        );
        system.push_str("Required:\n");
        system.push_str("- Conceptual clarity\n");
        system.push_str("- Psychological mechanisms explained as cause, effect, application\n");
        system.push_str("- Practical application in a professional context\n");
        system.push_str("- References to recognized authors and studies\n");
        system.push_str("- Logical progression from start to finish\n\n");
        system.push_str("Forbidden phrasing (never use):\n");
        for term in &policy.forbidden_terms {
            system.push_str(&format!("- \"{}\"\n", term));
        }
        system.push('\n');

        push_banner(&mut system, "REFERENCE BANK");
        system.push_str(&self.bank.render());
        system.push('\n');

        push_banner(&mut system, "REQUIRED OUTPUT FORMAT (JSON)");
        system.push_str("Produce ONLY a valid JSON object following this schema:\n\n");
        system.push_str(OUTPUT_SCHEMA);
        system.push_str("\n\nBlock rules:\n");
        system.push_str(&format!(
            "- At least {} chapters of type \"section\"\n",
            policy.min_content_sections
        ));
        system.push_str(&format!(
            "- Every chapter has at least {} blocks\n",
            policy.min_blocks_per_section
        ));
        system.push_str(&format!(
            "- Every chapter has {}-{} words of block text\n",
            policy.min_words_per_section, policy.target_max_words_per_section
        ));
        system.push_str("- Bullet lists explain each point, they do not just list\n");
        system.push_str("- Callouts carry real quotes or data with a source\n");
        system.push_str(&format!(
            "- Cite at least {} distinct recognized authors or sources\n\n",
            policy.min_citations
        ));
        system.push_str("Answer ONLY with the valid JSON, no Markdown fences, no commentary.");

        system
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(QualityPolicy::default(), ReferenceBank::default())
    }
}

/// Truncates `text` to at most `limit` characters, on a char boundary,
/// marking the cut with an ellipsis.
pub fn excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn push_banner(out: &mut String, title: &str) {
    out.push_str(RULE);
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(RULE);
    out.push_str("\n\n");
}

fn push_brief(out: &mut String, brief: &GenerationBrief) {
    out.push_str(&format!("TOPIC: {}\n", brief.topic()));
    out.push_str(&format!("AUDIENCE: {}\n", brief.audience()));
    out.push_str(&format!("GOAL: {}\n", brief.goal()));
    out.push_str(&format!("TONE: {}\n", brief.tone()));
    out.push_str(&format!("AUTHOR: {}\n", brief.author()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{Block, ContentSection, DocumentMeta, Section, Tone};

    fn brief() -> GenerationBrief {
        GenerationBrief::new(
            "Pricing psychology",
            "Small business owners",
            "Price with confidence",
            Tone::Educational,
            "Editorial Team",
        )
        .unwrap()
    }

    fn document(paragraph: String) -> Document {
        Document {
            meta: DocumentMeta {
                title: "Pricing".to_string(),
                subtitle: None,
                author: "Editorial Team".to_string(),
                tone: Tone::Educational,
                audience: "Owners".to_string(),
                goal: "Price well".to_string(),
            },
            sections: vec![Section::Content(ContentSection {
                title: "Anchors".to_string(),
                blocks: vec![Block::Paragraph { text: paragraph }],
            })],
        }
    }

    #[test]
    fn initial_prompt_restates_brief_and_plan() {
        let prompt = PromptBuilder::default().initial(&brief());
        assert!(prompt.user.contains("TOPIC: Pricing psychology"));
        assert!(prompt.user.contains("AUDIENCE: Small business owners"));
        assert!(prompt.user.contains("TONE: educational"));
        assert!(prompt.user.contains("CHAPTER 1 - THE STRUCTURAL PROBLEM"));
        assert!(prompt.user.contains("CHAPTER 7 - REFERENCES AND FURTHER READING"));
        assert!(prompt.user.contains("At least 5 blocks, 600-900 words"));
    }

    #[test]
    fn system_prompt_carries_schema_tags_and_policy() {
        let prompt = PromptBuilder::default().initial(&brief());
        for tag in ["\"hero\"", "\"section\"", "\"image\"", "\"paragraph\"", "\"bullet_list\"", "\"callout\""] {
            assert!(prompt.system.contains(tag), "missing {}", tag);
        }
        assert!(prompt.system.contains("\"magic formula\""));
        assert!(prompt.system.contains("Daniel Kahneman"));
        assert!(prompt.system.contains("At least 6 chapters"));
    }

    #[test]
    fn block_rules_follow_policy() {
        let policy = QualityPolicy {
            min_blocks_per_section: 8,
            ..Default::default()
        };
        let builder = PromptBuilder::new(policy, ReferenceBank::default());
        let prompt = builder.initial(&brief());
        assert!(prompt.system.contains("Every chapter has at least 8 blocks"));
    }

    #[test]
    fn repair_prompt_lists_every_problem_verbatim() {
        let problems = vec![
            "Section 'Anchors' has 400 words (minimum: 600, short by 200)".to_string(),
            "Forbidden terms found: magic formula".to_string(),
        ];
        let prompt = PromptBuilder::default().repair(&brief(), &problems, None);
        for problem in &problems {
            assert!(prompt.user.contains(&format!("- {}\n", problem)));
        }
        assert!(prompt.user.contains("TOPIC: Pricing psychology"));
        assert!(prompt.user.contains("Preserve everything that already passed"));
        assert!(prompt.user.contains("could not be used"));
    }

    #[test]
    fn repair_prompt_quotes_truncated_previous_document() {
        let long = "a".repeat(REPAIR_EXCERPT_CHARS * 2);
        let previous = document(long);
        let prompt = PromptBuilder::default().repair(&brief(), &[], Some(&previous));
        assert!(prompt.user.contains("CURRENT DRAFT FOR REVISION:\n# Pricing"));
        assert!(prompt.user.contains("a..."));
        assert!(!prompt.user.contains(&"a".repeat(REPAIR_EXCERPT_CHARS)));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("ação!", 2), "aç...");
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("exact", 5), "exact");
    }
}
