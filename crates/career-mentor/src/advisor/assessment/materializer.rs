use serde::Serialize;

use crate::navigation::NavigationTarget;

use super::profile::{
    Goal, GoalKind, ProfileRecord, DISPLAY_NAME_FALLBACK, GRADE_FALLBACK, PROFILE_SCHEMA_VERSION,
};
use super::survey::SurveyRecord;

/// Streak value every freshly materialized profile starts from.
pub(crate) const INITIAL_STREAK: u32 = 1;

/// Map a survey record into the profile record that gets persisted.
///
/// The mapping is deterministic and total: it accepts partially filled
/// records and never fails. Survey fields without a counterpart in the
/// profile schema (role, proficiency, tools, languages, project answers,
/// learning style) are dropped here on purpose.
pub fn profile_from_survey(record: &SurveyRecord) -> ProfileRecord {
    let display_name = record
        .full_name
        .split_whitespace()
        .next()
        .unwrap_or(DISPLAY_NAME_FALLBACK)
        .to_string();
    let grade = if record.experience.is_empty() {
        GRADE_FALLBACK.to_string()
    } else {
        format!("{} years exp", record.experience)
    };

    ProfileRecord {
        schema_version: PROFILE_SCHEMA_VERSION,
        name: record.full_name.clone(),
        display_name,
        email: record.email.clone(),
        grade,
        subjects: record.skills.clone(),
        goals: starter_goals(),
        topics: record.interests.clone(),
        streak: INITIAL_STREAK,
    }
}

/// The two goals every new profile is seeded with.
pub fn starter_goals() -> Vec<Goal> {
    vec![
        Goal::new(GoalKind::ShortTerm, "Start learning recommended skills"),
        Goal::new(GoalKind::LongTerm, "Land dream job in AI/ML"),
    ]
}

/// Outcome of a submission: the materialized profile, where the client
/// should navigate next, and an optional notice when the profile could not
/// be persisted. Navigation proceeds either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub profile: ProfileRecord,
    pub destination: NavigationTarget,
    pub notice: Option<String>,
}

impl SubmissionReceipt {
    pub fn view(&self) -> SubmissionView {
        SubmissionView {
            profile: self.profile.clone(),
            destination: self.destination.path(),
            notice: self.notice.clone(),
        }
    }
}

/// Wire rendering of a [`SubmissionReceipt`], with the destination spelled
/// as the client-side route path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub profile: ProfileRecord,
    pub destination: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
