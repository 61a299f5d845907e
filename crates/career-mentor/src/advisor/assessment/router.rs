use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::catalog::catalog_view;
use super::mutation::apply_field_mutation;
use super::progress::completion_report;
use super::service::AssessmentService;
use super::storage::ProfileStore;
use super::survey::{FieldMutation, SurveyRecord};

/// Router builder exposing HTTP endpoints for the survey and profile flow.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: ProfileStore + 'static,
{
    Router::new()
        .route("/api/v1/assessment/catalog", get(catalog_handler))
        .route("/api/v1/assessment/mutations", post(mutations_handler))
        .route("/api/v1/assessment/progress", post(progress_handler))
        .route(
            "/api/v1/assessment/submissions",
            post(submit_handler::<S>),
        )
        .route("/api/v1/assessment/profile", get(profile_handler::<S>))
        .with_state(service)
}

/// One raw field update event as the form reports it. `selected` is only
/// present on checkbox events.
#[derive(Debug, Deserialize)]
pub(crate) struct WireFieldMutation {
    pub(crate) field: String,
    pub(crate) value: String,
    #[serde(default)]
    pub(crate) selected: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MutationsRequest {
    #[serde(default)]
    pub(crate) record: SurveyRecord,
    pub(crate) mutations: Vec<WireFieldMutation>,
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, axum::Json(catalog_view())).into_response()
}

pub(crate) async fn mutations_handler(
    axum::Json(request): axum::Json<MutationsRequest>,
) -> Response {
    let MutationsRequest {
        mut record,
        mutations,
    } = request;

    for WireFieldMutation {
        field,
        value,
        selected,
    } in mutations
    {
        match FieldMutation::from_wire(&field, value, selected) {
            Some(mutation) => apply_field_mutation(&mut record, mutation),
            None => debug!(%field, "ignoring update for unrecognized survey field"),
        }
    }

    let completion = completion_report(&record);
    let payload = json!({
        "record": record,
        "completion": completion,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn progress_handler(
    axum::Json(record): axum::Json<SurveyRecord>,
) -> Response {
    (StatusCode::OK, axum::Json(completion_report(&record))).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    axum::Json(record): axum::Json<SurveyRecord>,
) -> Response
where
    S: ProfileStore + 'static,
{
    let receipt = service.submit(&record);
    (StatusCode::CREATED, axum::Json(receipt.view())).into_response()
}

pub(crate) async fn profile_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: ProfileStore + 'static,
{
    (StatusCode::OK, axum::Json(service.load_profile())).into_response()
}
