use serde::Serialize;

use super::survey::{ScalarField, SurveyRecord};

/// Fields a record must fill before it counts as complete. Optional answers
/// never move the needle.
pub const REQUIRED_FIELDS: [ScalarField; 3] = [
    ScalarField::FullName,
    ScalarField::Email,
    ScalarField::Location,
];

/// Snapshot of how far through the required answers a record has come.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReport {
    pub percent: f64,
    pub filled: usize,
    pub required: usize,
    pub complete: bool,
    pub missing: Vec<&'static str>,
}

/// Completion percentage over the required fields. One third per answer,
/// exactly `0.0` with nothing filled and exactly `100.0` with all three.
pub fn compute_completion(record: &SurveyRecord) -> f64 {
    completion_report(record).percent
}

/// Full completion snapshot, listing the wire names still missing.
pub fn completion_report(record: &SurveyRecord) -> CompletionReport {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !is_filled(record.scalar(**field)))
        .map(|field| field.wire_name())
        .collect();
    let required = REQUIRED_FIELDS.len();
    let filled = required - missing.len();

    CompletionReport {
        percent: (filled as f64 / required as f64) * 100.0,
        filled,
        required,
        complete: missing.is_empty(),
        missing,
    }
}

fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
