use tracing::debug;

use super::survey::{FieldMutation, SurveyRecord};

/// Apply one form update event to the working record.
///
/// Scalar updates replace the field's value outright. Membership updates
/// keep each checkbox group an ordered set drawn from its fixed option
/// list: additions outside the list are dropped, re-additions of present
/// values and removals of absent values are no-ops.
pub fn apply_field_mutation(record: &mut SurveyRecord, mutation: FieldMutation) {
    match mutation {
        FieldMutation::Scalar { field, value } => {
            *record.scalar_mut(field) = value;
        }
        FieldMutation::Membership {
            field,
            value,
            selected: true,
        } => {
            if !field.options().contains(&value.as_str()) {
                debug!(
                    field = field.wire_name(),
                    option = %value,
                    "dropping selection outside the option list"
                );
                return;
            }
            let members = record.members_mut(field);
            if !members.iter().any(|member| member == &value) {
                members.push(value);
            }
        }
        FieldMutation::Membership {
            field,
            value,
            selected: false,
        } => {
            record.members_mut(field).retain(|member| member != &value);
        }
    }
}
