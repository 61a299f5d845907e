use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use career_mentor::advisor::assessment::{assessment_router, AssessmentService, ProfileStore};
use career_mentor::advisor::trends::{
    CareerAdvice, DemandCsvImporter, TrendsDataset, TrendsHighlights, TrendsReport,
};
use career_mentor::error::AppError;
use career_mentor::identity::{auth_router, IdentityGateway};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct TrendsReportRequest {
    #[serde(default)]
    pub(crate) demand_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TrendsReportResponse {
    pub(crate) data_source: TrendsDataSource,
    pub(crate) dataset: TrendsDataset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) highlights: Option<TrendsHighlights>,
    pub(crate) advice: Vec<CareerAdvice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum TrendsDataSource {
    DemandCsv,
    Standard,
}

pub(crate) fn with_advisor_routes<S, G>(
    assessment: Arc<AssessmentService<S>>,
    identity: Arc<G>,
) -> axum::Router
where
    S: ProfileStore + 'static,
    G: IdentityGateway + 'static,
{
    assessment_router(assessment)
        .merge(auth_router(identity))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/trends", axum::routing::get(trends_endpoint))
        .route(
            "/api/v1/trends/report",
            axum::routing::post(trends_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn trends_endpoint() -> Json<TrendsReport> {
    Json(TrendsReport::standard())
}

pub(crate) async fn trends_report_endpoint(
    Json(payload): Json<TrendsReportRequest>,
) -> Result<Json<TrendsReportResponse>, AppError> {
    let TrendsReportRequest { demand_csv } = payload;

    let (dataset, data_source) = if let Some(csv) = demand_csv {
        let reader = Cursor::new(csv.into_bytes());
        let dataset = DemandCsvImporter::from_reader(reader)?;
        (dataset, TrendsDataSource::DemandCsv)
    } else {
        (TrendsDataset::standard(), TrendsDataSource::Standard)
    };

    let TrendsReport {
        dataset,
        highlights,
        advice,
    } = TrendsReport::from_dataset(dataset);

    Ok(Json(TrendsReportResponse {
        data_source,
        dataset,
        highlights,
        advice,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use career_mentor::advisor::trends::TrendsImportError;

    #[tokio::test]
    async fn trends_endpoint_serves_the_standard_report() {
        let Json(report) = trends_endpoint().await;

        assert_eq!(report.dataset.demand.len(), 5);
        assert_eq!(report.advice.len(), 4);
        let highlights = report.highlights.expect("highlights derived");
        assert_eq!(highlights.fastest_growing.skill, "AI/ML");
    }

    #[tokio::test]
    async fn trends_report_endpoint_defaults_to_the_standard_dataset() {
        let request = TrendsReportRequest { demand_csv: None };

        let Json(body) = trends_report_endpoint(Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.data_source, TrendsDataSource::Standard);
        assert_eq!(body.dataset, TrendsDataset::standard());
        assert_eq!(body.advice.len(), 4);
    }

    #[tokio::test]
    async fn trends_report_endpoint_applies_demand_overrides() {
        let request = TrendsReportRequest {
            demand_csv: Some("Skill,Demand\nCybersecurity,97\n".to_string()),
        };

        let Json(body) = trends_report_endpoint(Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.data_source, TrendsDataSource::DemandCsv);
        let highlights = body.highlights.expect("highlights derived");
        assert_eq!(highlights.fastest_growing.skill, "Cybersecurity");
        assert_eq!(highlights.fastest_growing.demand, 97);
    }

    #[tokio::test]
    async fn trends_report_endpoint_rejects_unparsable_demand() {
        let request = TrendsReportRequest {
            demand_csv: Some("Skill,Demand\nCloud,sky high\n".to_string()),
        };

        let error = trends_report_endpoint(Json(request))
            .await
            .expect_err("expected import error");

        match error {
            AppError::Trends(TrendsImportError::Demand { skill, .. }) => {
                assert_eq!(skill, "Cloud");
            }
            other => panic!("expected demand error, got {other:?}"),
        }
    }
}
