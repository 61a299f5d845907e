use crate::cli::ServeArgs;
use crate::infra::{profile_store_from, AppState, InMemoryIdentityGateway};
use crate::routes::with_advisor_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use career_mentor::advisor::assessment::AssessmentService;
use career_mentor::config::AppConfig;
use career_mentor::error::AppError;
use career_mentor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(profile_store_from(&config.storage)?);
    let assessment_service = Arc::new(AssessmentService::new(store));
    let identity_gateway = Arc::new(InMemoryIdentityGateway::default());

    let app = with_advisor_routes(assessment_service, identity_gateway)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "career mentor advisory service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
