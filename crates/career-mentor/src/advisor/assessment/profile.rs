use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Version stamped into every stored profile payload. Decoders refuse
/// payloads stamped with a newer version than this.
pub const PROFILE_SCHEMA_VERSION: u32 = 1;

pub(crate) const DISPLAY_NAME_FALLBACK: &str = "User";
pub(crate) const GRADE_FALLBACK: &str = "Beginner";

/// The persisted profile produced from a submitted survey. This is the
/// storage schema: every field carries a default so payloads written before
/// versioning, or with fields elided, still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileRecord {
    pub schema_version: u32,
    pub name: String,
    pub display_name: String,
    pub email: String,
    pub grade: String,
    pub subjects: Vec<String>,
    pub goals: Vec<Goal>,
    pub topics: Vec<String>,
    pub streak: u32,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            schema_version: PROFILE_SCHEMA_VERSION,
            name: String::new(),
            display_name: DISPLAY_NAME_FALLBACK.to_string(),
            email: String::new(),
            grade: GRADE_FALLBACK.to_string(),
            subjects: Vec::new(),
            goals: Vec::new(),
            topics: Vec::new(),
            streak: 0,
        }
    }
}

/// Time horizon of a learning goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalKind {
    #[serde(rename = "Short-term")]
    ShortTerm,
    #[serde(rename = "Long-term")]
    LongTerm,
}

impl GoalKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShortTerm => "Short-term",
            Self::LongTerm => "Long-term",
        }
    }
}

/// One learning goal shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub text: String,
}

impl Goal {
    pub fn new(kind: GoalKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// The dashboard-facing profile view. Distinct from [`ProfileRecord`]: this
/// is what the UI renders, including presentation-only fields the storage
/// schema never carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProfile {
    pub name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(rename = "dob", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub grade: String,
    pub language: String,
    pub school: String,
    pub email: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    pub subjects: Vec<String>,
    pub goals: Vec<Goal>,
    pub topics: Vec<String>,
    pub streak: u32,
}
