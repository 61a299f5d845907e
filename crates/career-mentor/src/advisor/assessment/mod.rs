//! Skills-survey intake and profile materialization.
//!
//! The flow mirrors the product's survey page: form events mutate a
//! [`SurveyRecord`], the completion tracker re-scores the required fields on
//! every change, and submission maps the record onto the smaller persisted
//! profile schema before the dashboard loads it back with validated decoding
//! and placeholder fallbacks.

pub mod catalog;
pub mod loader;
pub mod materializer;
pub mod mutation;
pub mod profile;
pub mod progress;
pub mod router;
pub mod service;
pub mod storage;
pub mod survey;

#[cfg(test)]
mod tests;

pub use catalog::{catalog_view, CatalogView};
pub use loader::{decode_stored_profile, display_profile_from, placeholder_profile};
pub use materializer::{profile_from_survey, starter_goals, SubmissionReceipt, SubmissionView};
pub use mutation::apply_field_mutation;
pub use profile::{DisplayProfile, Goal, GoalKind, ProfileRecord, PROFILE_SCHEMA_VERSION};
pub use progress::{completion_report, compute_completion, CompletionReport, REQUIRED_FIELDS};
pub use router::assessment_router;
pub use service::AssessmentService;
pub use storage::{ProfileStore, StoreError, PROFILE_STORAGE_KEY};
pub use survey::{
    FieldMutation, MultiValueField, ScalarField, SurveyRecord, SURVEY_SCHEMA_VERSION,
};
