use std::sync::Arc;

use tracing::warn;

use crate::navigation::NavigationTarget;

use super::loader::{decode_stored_profile, display_profile_from, placeholder_profile};
use super::materializer::{profile_from_survey, SubmissionReceipt};
use super::profile::DisplayProfile;
use super::progress::{completion_report, CompletionReport};
use super::storage::{ProfileStore, PROFILE_STORAGE_KEY};
use super::survey::SurveyRecord;

/// Service composing the completion tracker, profile materializer, and
/// profile loader on top of a store backend.
pub struct AssessmentService<S> {
    store: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: ProfileStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Completion snapshot for the given working record.
    pub fn progress(&self, record: &SurveyRecord) -> CompletionReport {
        completion_report(record)
    }

    /// Materialize and persist the profile for a submitted survey.
    ///
    /// A failed write never blocks the flow: the receipt still points at
    /// the profile page and carries a notice saying why nothing was saved.
    pub fn submit(&self, record: &SurveyRecord) -> SubmissionReceipt {
        let profile = profile_from_survey(record);

        let write = serde_json::to_string(&profile)
            .map_err(|error| error.to_string())
            .and_then(|payload| {
                self.store
                    .put(PROFILE_STORAGE_KEY, payload)
                    .map_err(|error| error.to_string())
            });

        let notice = match write {
            Ok(()) => None,
            Err(reason) => {
                warn!(%reason, "profile write failed, continuing without saving");
                Some(format!("Your profile could not be saved: {reason}"))
            }
        };

        SubmissionReceipt {
            profile,
            destination: NavigationTarget::Profile,
            notice,
        }
    }

    /// Profile view for the dashboard. Falls back to the placeholder when
    /// nothing is stored, the store is unreachable, or the stored payload
    /// does not decode.
    pub fn load_profile(&self) -> DisplayProfile {
        let stored = match self.store.get(PROFILE_STORAGE_KEY) {
            Ok(stored) => stored,
            Err(error) => {
                warn!(%error, "profile read failed, using the placeholder");
                return placeholder_profile();
            }
        };

        match stored.and_then(|raw| decode_stored_profile(&raw)) {
            Some(record) => display_profile_from(record),
            None => placeholder_profile(),
        }
    }
}
