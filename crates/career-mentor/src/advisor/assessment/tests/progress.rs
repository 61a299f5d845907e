use super::common::*;

use crate::advisor::assessment::{
    apply_field_mutation, completion_report, compute_completion, ScalarField, SurveyRecord,
    REQUIRED_FIELDS,
};

fn expected_percent(filled: usize) -> f64 {
    (filled as f64 / REQUIRED_FIELDS.len() as f64) * 100.0
}

#[test]
fn empty_record_scores_exactly_zero_and_lists_every_required_field() {
    let report = completion_report(&SurveyRecord::default());

    assert_eq!(report.percent, 0.0);
    assert_eq!(report.filled, 0);
    assert_eq!(report.required, 3);
    assert!(!report.complete);
    assert_eq!(report.missing, vec!["fullName", "email", "location"]);
}

#[test]
fn each_required_field_advances_by_a_third() {
    let mut record = SurveyRecord::default();
    let mut seen = vec![compute_completion(&record)];

    apply_field_mutation(&mut record, scalar(ScalarField::FullName, "Ada Lovelace"));
    seen.push(compute_completion(&record));
    apply_field_mutation(&mut record, scalar(ScalarField::Email, "ada@example.com"));
    seen.push(compute_completion(&record));
    apply_field_mutation(&mut record, scalar(ScalarField::Location, "London"));
    seen.push(compute_completion(&record));

    let expected: Vec<f64> = (0..=3).map(expected_percent).collect();
    assert_eq!(seen, expected);
}

#[test]
fn whitespace_only_answers_do_not_count_as_filled() {
    let mut record = required_only_record();
    apply_field_mutation(&mut record, scalar(ScalarField::Email, "   "));

    let report = completion_report(&record);

    assert_eq!(report.percent, expected_percent(2));
    assert_eq!(report.filled, 2);
    assert_eq!(report.missing, vec!["email"]);
}

#[test]
fn optional_answers_never_move_the_percentage() {
    let mut record = filled_record();
    for field in REQUIRED_FIELDS {
        apply_field_mutation(&mut record, scalar(field, ""));
    }

    assert_eq!(compute_completion(&record), 0.0);
}

#[test]
fn complete_record_scores_exactly_one_hundred() {
    let report = completion_report(&required_only_record());

    assert_eq!(report.percent, 100.0);
    assert_eq!(report.filled, report.required);
    assert!(report.complete);
    assert!(report.missing.is_empty());
}
