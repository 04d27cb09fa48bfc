use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_eligibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use spm_scholarship::config::AppConfig;
use spm_scholarship::eligibility::{
    scholarship_catalog, validate_catalog, EligibilityService, IntakePolicy,
};
use spm_scholarship::error::AppError;
use spm_scholarship::telemetry::{self, LogSink};
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

    telemetry::init(&config.telemetry, LogSink::Stdout)?;

    let catalog = scholarship_catalog();
    validate_catalog(catalog)?;
    info!(scholarships = catalog.len(), "scholarship catalog validated");

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let policy = IntakePolicy::from(&config.eligibility);
    let service = Arc::new(EligibilityService::with_catalog(policy, catalog));

    let app = with_eligibility_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        reject_duplicate_subjects = policy.reject_duplicate_subjects,
        "scholarship checker ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
