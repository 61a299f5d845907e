use super::common::*;

use crate::advisor::assessment::{apply_field_mutation, MultiValueField, ScalarField, SurveyRecord};

#[test]
fn scalar_updates_replace_the_previous_value() {
    let mut record = SurveyRecord::default();

    apply_field_mutation(&mut record, scalar(ScalarField::Location, "Berlin"));
    apply_field_mutation(&mut record, scalar(ScalarField::Location, "London"));

    assert_eq!(record.location, "London");
}

#[test]
fn membership_additions_preserve_selection_order() {
    let mut record = SurveyRecord::default();

    apply_field_mutation(&mut record, membership(MultiValueField::Skills, "React", true));
    apply_field_mutation(&mut record, membership(MultiValueField::Skills, "Python", true));

    assert_eq!(record.skills, vec!["React".to_string(), "Python".to_string()]);
}

#[test]
fn repeated_addition_keeps_a_single_entry() {
    let mut record = SurveyRecord::default();

    apply_field_mutation(&mut record, membership(MultiValueField::Skills, "Python", true));
    apply_field_mutation(&mut record, membership(MultiValueField::Skills, "Python", true));

    assert_eq!(record.skills, vec!["Python".to_string()]);
}

#[test]
fn removing_an_absent_value_changes_nothing() {
    let mut record = SurveyRecord::default();

    apply_field_mutation(&mut record, membership(MultiValueField::Skills, "Python", true));
    apply_field_mutation(&mut record, membership(MultiValueField::Skills, "SQL", false));

    assert_eq!(record.skills, vec!["Python".to_string()]);
}

#[test]
fn add_then_remove_leaves_the_set_empty() {
    let mut record = SurveyRecord::default();

    apply_field_mutation(&mut record, membership(MultiValueField::Interests, "GenAI", true));
    apply_field_mutation(
        &mut record,
        membership(MultiValueField::Interests, "GenAI", false),
    );

    assert!(record.interests.is_empty());
}

#[test]
fn additions_outside_the_option_list_are_dropped() {
    let mut record = SurveyRecord::default();

    apply_field_mutation(
        &mut record,
        membership(MultiValueField::Skills, "Fortran", true),
    );

    assert!(record.skills.is_empty());
}

#[test]
fn groups_do_not_leak_into_each_other() {
    let mut record = SurveyRecord::default();

    apply_field_mutation(&mut record, membership(MultiValueField::Skills, "Python", true));
    apply_field_mutation(
        &mut record,
        membership(MultiValueField::AiTools, "Pandas", true),
    );

    assert_eq!(record.skills, vec!["Python".to_string()]);
    assert_eq!(record.ai_tools, vec!["Pandas".to_string()]);
    assert!(record.interests.is_empty());
}
