use incident_qa::config::AppConfig;
use incident_qa::error::AppError;
use incident_qa::quality::QualityEngine;
use incident_qa::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads configuration, installs telemetry and builds the quality engine.
pub(crate) fn bootstrap() -> Result<(AppConfig, QualityEngine), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let engine = QualityEngine::bootstrap(&config.analysis)?;
    Ok((config, engine))
}
