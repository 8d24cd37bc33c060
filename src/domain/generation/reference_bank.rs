//! Curated bank of authors, institutions and journals the generator is
//! pointed at, so the citation rule has something real to find.

use serde::{Deserialize, Serialize};

/// An author with a representative work and the concepts it is known for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorReference {
    pub name: String,
    pub work: String,
    pub concepts: Vec<String>,
}

/// A themed group of references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCluster {
    pub name: String,
    #[serde(default)]
    pub authors: Vec<AuthorReference>,
    #[serde(default)]
    pub institutions: Vec<String>,
    #[serde(default)]
    pub journals: Vec<String>,
}

/// The full reference bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceBank {
    pub clusters: Vec<ReferenceCluster>,
}

impl ReferenceBank {
    /// Renders the bank as a plain-text list for inclusion in a prompt.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for cluster in &self.clusters {
            out.push_str(&format!("\n{}\n", cluster.name.to_uppercase()));
            for author in &cluster.authors {
                out.push_str(&format!("- {} (\"{}\")\n", author.name, author.work));
                out.push_str(&format!("  Concepts: {}\n", author.concepts.join(", ")));
            }
            if !cluster.institutions.is_empty() {
                out.push_str("Institutions:\n");
                for institution in &cluster.institutions {
                    out.push_str(&format!("- {}\n", institution));
                }
            }
            if !cluster.journals.is_empty() {
                out.push_str("Academic journals:\n");
                for journal in &cluster.journals {
                    out.push_str(&format!("- {}\n", journal));
                }
            }
        }
        out
    }

    pub fn author_count(&self) -> usize {
        self.clusters.iter().map(|c| c.authors.len()).sum()
    }
}

impl Default for ReferenceBank {
    fn default() -> Self {
        Self {
            clusters: vec![
                cluster(
                    "Psychology & Decision Making",
                    vec![
                        author(
                            "Daniel Kahneman",
                            "Thinking, Fast and Slow",
                            &["System 1 and System 2", "Cognitive biases", "Heuristics", "WYSIATI"],
                        ),
                        author(
                            "Amos Tversky",
                            "Judgment Under Uncertainty",
                            &["Prospect theory", "Loss aversion", "Anchoring"],
                        ),
                        author(
                            "Dan Ariely",
                            "Predictably Irrational",
                            &["Predictable irrationality", "Decoy effect", "The power of free"],
                        ),
                        author(
                            "Richard Thaler",
                            "Nudge",
                            &["Choice architecture", "Nudges", "Libertarian paternalism", "Mental accounting"],
                        ),
                        author(
                            "Barry Schwartz",
                            "The Paradox of Choice",
                            &["Choice overload", "Decision paralysis", "Satisficing vs maximizing"],
                        ),
                    ],
                ),
                cluster(
                    "Neuroscience & Emotion",
                    vec![
                        author(
                            "Antonio Damasio",
                            "Descartes' Error",
                            &["Somatic markers", "Emotion in decision making"],
                        ),
                        author(
                            "Joseph LeDoux",
                            "The Emotional Brain",
                            &["Amygdala", "Emotional processing", "Emotional memory"],
                        ),
                        author(
                            "Paul Zak",
                            "The Moral Molecule",
                            &["Oxytocin", "Trust", "Social neuroscience", "Empathy"],
                        ),
                        author(
                            "Lisa Feldman Barrett",
                            "How Emotions Are Made",
                            &["Theory of constructed emotion", "Predictive brain"],
                        ),
                    ],
                ),
                cluster(
                    "Persuasion & Influence",
                    vec![
                        author(
                            "Robert Cialdini",
                            "Influence: The Psychology of Persuasion",
                            &["Reciprocity", "Scarcity", "Authority", "Consistency", "Liking", "Social proof"],
                        ),
                        author(
                            "Robert Cialdini",
                            "Pre-Suasion",
                            &["Privileged moments", "Channeled attention"],
                        ),
                        author(
                            "BJ Fogg",
                            "Tiny Habits",
                            &["Behavior Model (B=MAP)", "Motivation, ability and prompt", "Tiny habits"],
                        ),
                        author(
                            "Nir Eyal",
                            "Hooked",
                            &["Hook model", "Internal and external triggers", "Variable rewards", "Investment"],
                        ),
                        author(
                            "Jonah Berger",
                            "Contagious",
                            &["STEPPS", "Social currency", "Triggers"],
                        ),
                    ],
                ),
                ReferenceCluster {
                    institutions: strings(&[
                        "Harvard Business Review",
                        "McKinsey Insights",
                        "MIT Sloan Management Review",
                        "Stanford Graduate School of Business",
                    ]),
                    ..cluster(
                        "Marketing & Strategy",
                        vec![
                            author(
                                "Philip Kotler",
                                "Marketing Management",
                                &["Marketing mix", "Segmentation", "Positioning", "The 4Ps"],
                            ),
                            author(
                                "Seth Godin",
                                "This Is Marketing",
                                &["Permission marketing", "Tribes", "Smallest viable market", "Status"],
                            ),
                            author(
                                "Al Ries & Jack Trout",
                                "Positioning",
                                &["Mental positioning", "Differentiation", "Being first"],
                            ),
                            author(
                                "Simon Sinek",
                                "Start With Why",
                                &["Golden Circle", "Why before what", "Inspiring leadership"],
                            ),
                        ],
                    )
                },
                ReferenceCluster {
                    name: "Consumer Behavior".to_string(),
                    authors: Vec::new(),
                    institutions: strings(&[
                        "American Psychological Association",
                        "Association for Consumer Research",
                        "Marketing Science Institute",
                        "Behavioral Science & Policy Association",
                    ]),
                    journals: strings(&[
                        "Journal of Consumer Research",
                        "Journal of Marketing Research",
                        "Journal of Consumer Psychology",
                        "Journal of Behavioral Decision Making",
                    ]),
                },
            ],
        }
    }
}

fn cluster(name: &str, authors: Vec<AuthorReference>) -> ReferenceCluster {
    ReferenceCluster {
        name: name.to_string(),
        authors,
        institutions: Vec::new(),
        journals: Vec::new(),
    }
}

fn author(name: &str, work: &str, concepts: &[&str]) -> AuthorReference {
    AuthorReference {
        name: name.to_string(),
        work: work.to_string(),
        concepts: strings(concepts),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
