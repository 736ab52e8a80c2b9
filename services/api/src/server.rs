use crate::cli::ServeArgs;
use crate::infra::{bootstrap, AppState};
use crate::routes::with_incident_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use incident_qa::error::AppError;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let (mut config, engine) = bootstrap()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_incident_routes(Arc::new(engine), config.analysis.preview_rows)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "incident quality analyzer ready");

    axum::serve(listener, app).await?;
    Ok(())
}
