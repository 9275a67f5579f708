use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionRepository, OutboxMailer};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use virtual_narrative::config::AppConfig;
use virtual_narrative::error::AppError;
use virtual_narrative::telemetry;
use virtual_narrative::workflows::assessment::AssessmentService;

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

    let repository = Arc::new(InMemorySessionRepository::default());
    let mailer = Arc::new(OutboxMailer::default());
    let assessment_service = Arc::new(AssessmentService::new(
        repository,
        mailer,
        config.assessment,
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        weighting = ?config.assessment.weighting,
        pillar_basis = ?config.assessment.pillar_basis,
        "data maturity assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
