use serde::Serialize;

/// Options offered by the skills checkbox group.
pub const SKILL_OPTIONS: &[&str] = &[
    "Python",
    "SQL",
    "React",
    "Machine Learning",
    "UI/UX",
    "JavaScript",
    "Java",
    "Node.js",
];

/// Options offered by the AI tooling checkbox group.
pub const AI_TOOL_OPTIONS: &[&str] = &[
    "TensorFlow",
    "PyTorch",
    "HuggingFace",
    "LangChain",
    "OpenAI API",
    "Pandas",
];

/// Options offered by the interest-areas checkbox group.
pub const INTEREST_OPTIONS: &[&str] = &[
    "GenAI",
    "Healthcare AI",
    "Web Development",
    "Cloud Computing",
    "Mobile Development",
    "Blockchain",
];

/// Self-assessed AI proficiency levels.
pub const AI_PROFICIENCY_OPTIONS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

/// Experience brackets in years. The survey also accepts the empty bracket,
/// meaning "not provided".
pub const EXPERIENCE_BRACKETS: &[&str] = &["0-1", "2-3", "4-5", "6-10", "10+"];

pub const HAS_PROJECTS_OPTIONS: &[&str] = &["Yes", "No"];

pub const CLIENT_WORK_OPTIONS: &[&str] = &["Yes", "No", "Maybe"];

pub const LEARNING_STYLE_OPTIONS: &[&str] =
    &["Videos", "Reading", "Hands-on projects", "Live sessions"];

/// Form definition handed to rendering collaborators so option lists live in
/// exactly one place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub skills: &'static [&'static str],
    pub ai_tools: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub ai_proficiency: &'static [&'static str],
    pub experience_brackets: &'static [&'static str],
    pub has_projects: &'static [&'static str],
    pub client_work: &'static [&'static str],
    pub learning_styles: &'static [&'static str],
}

pub fn catalog_view() -> CatalogView {
    CatalogView {
        skills: SKILL_OPTIONS,
        ai_tools: AI_TOOL_OPTIONS,
        interests: INTEREST_OPTIONS,
        ai_proficiency: AI_PROFICIENCY_OPTIONS,
        experience_brackets: EXPERIENCE_BRACKETS,
        has_projects: HAS_PROJECTS_OPTIONS,
        client_work: CLIENT_WORK_OPTIONS,
        learning_styles: LEARNING_STYLE_OPTIONS,
    }
}
