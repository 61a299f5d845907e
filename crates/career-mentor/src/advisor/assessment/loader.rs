use chrono::NaiveDate;
use tracing::warn;

use super::profile::{DisplayProfile, Goal, GoalKind, ProfileRecord, PROFILE_SCHEMA_VERSION};

const AVATAR_URL_BASE: &str = "https://api.dicebear.com/7.x/adventurer/svg";
const DISPLAY_LANGUAGE: &str = "English";

/// Decode a raw stored payload into a profile record.
///
/// Fails closed: malformed payloads and payloads stamped with a newer
/// schema version both yield `None`, leaving the caller to fall back to the
/// placeholder instead of rendering half-parsed data.
pub fn decode_stored_profile(raw: &str) -> Option<ProfileRecord> {
    let record: ProfileRecord = match serde_json::from_str(raw) {
        Ok(record) => record,
        Err(error) => {
            warn!(%error, "stored profile payload is malformed, ignoring it");
            return None;
        }
    };

    if record.schema_version > PROFILE_SCHEMA_VERSION {
        warn!(
            stored = record.schema_version,
            supported = PROFILE_SCHEMA_VERSION,
            "stored profile was written by a newer schema, ignoring it"
        );
        return None;
    }

    Some(record)
}

/// Reshape a persisted record into the dashboard view, synthesizing the
/// display-only fields the survey never collects. Age, date of birth, and
/// school stay empty; the avatar is derived from the display name.
pub fn display_profile_from(record: ProfileRecord) -> DisplayProfile {
    let avatar_url = avatar_url_for(&record.display_name);

    DisplayProfile {
        name: record.name,
        display_name: record.display_name,
        age: None,
        date_of_birth: None,
        grade: record.grade,
        language: DISPLAY_LANGUAGE.to_string(),
        school: String::new(),
        email: record.email,
        avatar_url,
        subjects: record.subjects,
        goals: record.goals,
        topics: record.topics,
        streak: record.streak,
    }
}

pub(crate) fn avatar_url_for(display_name: &str) -> String {
    format!("{AVATAR_URL_BASE}?seed={display_name}")
}

/// The sample profile the dashboard falls back to before any survey has
/// been submitted.
pub fn placeholder_profile() -> DisplayProfile {
    DisplayProfile {
        name: "Emma Rose Johnson".to_string(),
        display_name: "Emma".to_string(),
        age: Some(13),
        date_of_birth: NaiveDate::from_ymd_opt(2011, 3, 15),
        grade: "7th Grade".to_string(),
        language: DISPLAY_LANGUAGE.to_string(),
        school: "Riverside Middle School".to_string(),
        email: "parent@email.com".to_string(),
        avatar_url: avatar_url_for("Emma"),
        subjects: vec![
            "Mathematics".to_string(),
            "Science".to_string(),
            "English".to_string(),
            "History".to_string(),
            "Art".to_string(),
            "Music".to_string(),
        ],
        goals: vec![
            Goal::new(
                GoalKind::ShortTerm,
                "Master multiplication tables up to 12x12",
            ),
            Goal::new(GoalKind::ShortTerm, "Improve reading comprehension scores"),
            Goal::new(
                GoalKind::LongTerm,
                "Prepare for Science Olympiad competition",
            ),
            Goal::new(GoalKind::LongTerm, "Achieve Honor Roll status"),
        ],
        topics: vec![
            "Fractions & Decimals".to_string(),
            "Photosynthesis".to_string(),
            "American Revolution".to_string(),
            "Creative Writing".to_string(),
            "Geometry Basics".to_string(),
            "Solar System".to_string(),
            "Poetry Analysis".to_string(),
            "World War II".to_string(),
            "Algebra Introduction".to_string(),
            "Cell Biology".to_string(),
            "Essay Writing".to_string(),
            "Ancient Civilizations".to_string(),
        ],
        streak: 12,
    }
}
