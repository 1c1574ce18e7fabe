use serde::{Deserialize, Serialize};

/// How hard a project idea looks for a given team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Suggested plan for a hackathon project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSuggestion {
    pub tech_stack: Vec<String>,
    pub apis: Vec<String>,
    pub scope: String,
    pub implementation: String,
    pub estimated_hours: u32,
    pub difficulty: Difficulty,
}

/// Kind of learning resource attached to mentor advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Documentation,
    Tutorial,
    Example,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

/// Mentor feedback on a project in progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorAdvice {
    pub suggestion: String,
    pub reasoning: String,
    pub next_steps: Vec<String>,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    Improvement,
    Optimization,
    Style,
}

/// A single remark on one line of reviewed code (1-based)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSuggestion {
    pub line: usize,
    #[serde(rename = "type")]
    pub kind: ReviewKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReview {
    pub suggestions: Vec<ReviewSuggestion>,
    /// 0-100
    pub overall_score: u8,
    pub summary: String,
}

/// Source of free-form text: project plans, mentor advice, code reviews
///
/// Kept apart from the scoring core. The template implementation below is
/// deterministic; a generative backend can sit behind the same trait.
pub trait TextGenerator: Send + Sync {
    fn suggest_project(&self, idea: &str, team_skills: &[String]) -> ProjectSuggestion;

    fn mentor_advice(&self, description: &str, progress: &str, challenges: &[String]) -> MentorAdvice;

    fn review_code(&self, code: &str, language: &str) -> CodeReview;
}

const BASE_STACK: &[&str] = &["React", "Node.js", "TypeScript"];

/// Keywords -> technologies added to the stack
const STACK_RULES: &[(&[&str], &[&str])] = &[
    (&["ai", "machine learning"], &["Python", "TensorFlow", "OpenAI API"]),
    (&["music", "audio"], &["Web Audio API", "Tone.js"]),
    (&["blockchain", "web3"], &["Solidity", "Web3.js", "Hardhat"]),
    (&["vr", "ar"], &["Unity", "C#", "Three.js"]),
];

/// Keyword -> APIs worth integrating
const API_RULES: &[(&str, &[&str])] = &[
    ("ai", &["OpenAI API", "Hugging Face API"]),
    ("music", &["Spotify API", "Web Audio API"]),
    ("blockchain", &["Ethereum API", "Polygon API"]),
    ("map", &["Google Maps API", "Mapbox API"]),
    ("payment", &["Stripe API", "PayPal API"]),
];

const FALLBACK_APIS: &[&str] = &["REST API", "GraphQL"];

const ADVANCED_CONCEPTS: &[&str] = &["ai", "blockchain", "vr"];

/// Teams listing more skills than this count as experienced
const EXPERIENCED_TEAM_SKILLS: usize = 3;

const SCOPE: &str = "MVP: Focus on core functionality with a simple, working prototype. Implement the main feature that demonstrates your concept, then add polish and additional features if time permits.";

const IMPLEMENTATION_PLAN: &str = "Start with a basic UI mockup, implement core logic with mock data, integrate real APIs/services, add styling and animations, then test and refine the user experience.";

const MENTOR_SUGGESTION: &str = "Focus on the core MVP features first and get one end-to-end flow working before adding anything else.";

/// Steps every team gets after its own blockers
const MENTOR_STEPS: &[&str] = &[
    "Stub external services with mock data so the main flow can be demoed",
    "Test the complete pipeline end to end",
    "Polish the demo path and prepare the pitch",
];

/// Blockers listed as next steps, at most
const MAX_CHALLENGE_STEPS: usize = 3;

/// Keyword -> (title, url, kind) resources for mentor advice
const RESOURCE_RULES: &[(&[&str], &str, &str, ResourceKind)] = &[
    (&["music", "audio"], "Tone.js Documentation", "https://tonejs.github.io/", ResourceKind::Documentation),
    (&["music", "audio"], "Web Audio API Tutorial", "https://developer.mozilla.org/en-US/docs/Web/API/Web_Audio_API", ResourceKind::Tutorial),
    (&["ai", "machine learning"], "Hugging Face Course", "https://huggingface.co/learn", ResourceKind::Tutorial),
    (&["blockchain", "web3"], "Solidity Documentation", "https://docs.soliditylang.org/", ResourceKind::Documentation),
    (&["vr", "ar"], "Three.js Examples", "https://threejs.org/examples/", ResourceKind::Example),
];

const FALLBACK_RESOURCE: (&str, &str, ResourceKind) = (
    "MDN Web Docs",
    "https://developer.mozilla.org/",
    ResourceKind::Documentation,
);

/// Lines longer than this get a style remark
const MAX_LINE_LENGTH: usize = 120;
/// Points taken off a perfect review per remark
const REVIEW_PENALTY: usize = 5;

/// Keyword-driven suggestions with no external calls
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }

    fn tech_stack(&self, idea: &IdeaText, team_skills: &[String]) -> Vec<String> {
        let mut stack: Vec<&str> = BASE_STACK.to_vec();
        for (keywords, additions) in STACK_RULES {
            if idea.mentions_any(keywords) {
                stack.extend_from_slice(additions);
            }
        }

        let skills: Vec<String> = team_skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        stack
            .into_iter()
            .filter(|tech| {
                let tech = tech.to_lowercase();
                skills.is_empty()
                    || skills
                        .iter()
                        .any(|skill| skill.contains(&tech) || tech.contains(skill.as_str()))
            })
            .map(str::to_string)
            .collect()
    }

    fn apis(&self, idea: &IdeaText) -> Vec<String> {
        let apis: Vec<String> = API_RULES
            .iter()
            .filter(|(keyword, _)| idea.mentions(keyword))
            .flat_map(|(_, apis)| apis.iter().map(|a| a.to_string()))
            .collect();

        if apis.is_empty() {
            FALLBACK_APIS.iter().map(|a| a.to_string()).collect()
        } else {
            apis
        }
    }

    fn estimated_hours(&self, idea: &IdeaText) -> u32 {
        if idea.mentions_any(&["ai", "blockchain"]) {
            48
        } else if idea.mentions_any(&["vr", "complex"]) {
            36
        } else {
            24
        }
    }

    fn difficulty(&self, idea: &IdeaText, team_skills: &[String]) -> Difficulty {
        let advanced = idea.mentions_any(ADVANCED_CONCEPTS);
        let experienced = team_skills.len() > EXPERIENCED_TEAM_SKILLS;

        match (advanced, experienced) {
            (true, false) => Difficulty::Advanced,
            (true, true) | (false, false) => Difficulty::Intermediate,
            (false, true) => Difficulty::Beginner,
        }
    }
}

impl TemplateGenerator {
    fn resources(&self, description: &IdeaText) -> Vec<Resource> {
        let resources: Vec<Resource> = RESOURCE_RULES
            .iter()
            .filter(|(keywords, ..)| description.mentions_any(keywords))
            .map(|(_, title, url, kind)| Resource {
                title: title.to_string(),
                url: url.to_string(),
                kind: *kind,
            })
            .collect();

        if resources.is_empty() {
            let (title, url, kind) = FALLBACK_RESOURCE;
            vec![Resource {
                title: title.to_string(),
                url: url.to_string(),
                kind,
            }]
        } else {
            resources
        }
    }

    /// Line-level remarks for one line of code
    fn review_line(&self, number: usize, line: &str, language: Language) -> Vec<ReviewSuggestion> {
        let mut remarks = Vec::new();
        let remark = |kind, message: &str, example: Option<&str>| ReviewSuggestion {
            line: number,
            kind,
            message: message.to_string(),
            example: example.map(str::to_string),
        };

        if line.contains("TODO") || line.contains("FIXME") {
            remarks.push(remark(ReviewKind::Improvement, "Resolve this TODO before the demo", None));
        }
        if line.chars().count() > MAX_LINE_LENGTH {
            remarks.push(remark(ReviewKind::Style, "Line is longer than 120 characters; split it up", None));
        }

        match language {
            Language::Rust => {
                if line.contains(".unwrap()") {
                    remarks.push(remark(
                        ReviewKind::Improvement,
                        "Propagate the error instead of unwrapping",
                        Some("let value = fallible()?;"),
                    ));
                }
                if line.contains(".clone()") && line.contains("for ") {
                    remarks.push(remark(
                        ReviewKind::Optimization,
                        "Cloning inside a loop; borrow instead if possible",
                        None,
                    ));
                }
            }
            Language::JavaScript => {
                if line.contains("console.log") {
                    remarks.push(remark(ReviewKind::Style, "Remove debug logging", None));
                }
                if line.contains(" == ") || line.contains(" != ") {
                    remarks.push(remark(
                        ReviewKind::Improvement,
                        "Use strict equality",
                        Some("if (a === b) { ... }"),
                    ));
                }
                if line.contains("var ") {
                    remarks.push(remark(ReviewKind::Style, "Prefer const or let over var", None));
                }
            }
            Language::Python => {
                if line.trim_start().starts_with("except:") {
                    remarks.push(remark(
                        ReviewKind::Improvement,
                        "Catch a specific exception instead of a bare except",
                        Some("except ValueError as error:"),
                    ));
                }
                if line.contains("print(") {
                    remarks.push(remark(ReviewKind::Style, "Use logging instead of print", None));
                }
            }
            Language::Other => {}
        }

        remarks
    }
}

impl TextGenerator for TemplateGenerator {
    fn suggest_project(&self, idea: &str, team_skills: &[String]) -> ProjectSuggestion {
        let idea = IdeaText::new(idea);

        ProjectSuggestion {
            tech_stack: self.tech_stack(&idea, team_skills),
            apis: self.apis(&idea),
            scope: SCOPE.to_string(),
            implementation: IMPLEMENTATION_PLAN.to_string(),
            estimated_hours: self.estimated_hours(&idea),
            difficulty: self.difficulty(&idea, team_skills),
        }
    }

    fn mentor_advice(&self, description: &str, progress: &str, challenges: &[String]) -> MentorAdvice {
        let text = IdeaText::new(description);

        let reasoning = if progress.trim().is_empty() {
            "No progress reported yet. A thin working slice early leaves time to recover from surprises later.".to_string()
        } else {
            format!(
                "You reported: {}. Build on what already works and keep new scope out until the main flow is demoable.",
                progress.trim().trim_end_matches('.')
            )
        };

        let mut next_steps: Vec<String> = challenges
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .take(MAX_CHALLENGE_STEPS)
            .map(|c| format!("Unblock: {}", c))
            .collect();
        next_steps.extend(MENTOR_STEPS.iter().map(|s| s.to_string()));

        MentorAdvice {
            suggestion: MENTOR_SUGGESTION.to_string(),
            reasoning,
            next_steps,
            resources: self.resources(&text),
        }
    }

    fn review_code(&self, code: &str, language: &str) -> CodeReview {
        if code.trim().is_empty() {
            return CodeReview {
                suggestions: Vec::new(),
                overall_score: 0,
                summary: "No code to review.".to_string(),
            };
        }

        let language = Language::parse(language);
        let suggestions: Vec<ReviewSuggestion> = code
            .lines()
            .enumerate()
            .flat_map(|(index, line)| self.review_line(index + 1, line, language))
            .collect();

        let penalty = suggestions.len().saturating_mul(REVIEW_PENALTY);
        let overall_score = 100usize.saturating_sub(penalty) as u8;

        let summary = if suggestions.is_empty() {
            "Clean structure. No issues found.".to_string()
        } else {
            format!(
                "Good start. {} remark(s) to address before the demo.",
                suggestions.len()
            )
        };

        CodeReview {
            suggestions,
            overall_score,
            summary,
        }
    }
}

/// Languages with dedicated review rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Rust,
    JavaScript,
    Python,
    Other,
}

impl Language {
    fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "rust" | "rs" => Language::Rust,
            "javascript" | "js" | "jsx" | "typescript" | "ts" | "tsx" => Language::JavaScript,
            "python" | "py" => Language::Python,
            _ => Language::Other,
        }
    }
}

/// Idea text normalised for whole-word keyword lookups
///
/// Stored as " word word word " so a keyword (or phrase) matches only on
/// word boundaries: "ai" hits "AI music" but not "detail".
struct IdeaText {
    padded: String,
}

impl IdeaText {
    fn new(idea: &str) -> Self {
        let words: Vec<String> = idea
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self {
            padded: format!(" {} ", words.join(" ")),
        }
    }

    fn mentions(&self, keyword: &str) -> bool {
        self.padded.contains(&format!(" {} ", keyword))
    }

    fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.mentions(k))
    }
}
