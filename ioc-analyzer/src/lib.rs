pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use config::AnalyzerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use services::InferenceProvider;
use std::sync::Arc;

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: AnalyzerConfig,
    pub provider: Arc<dyn InferenceProvider>,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(
        config: AnalyzerConfig,
        provider: Arc<dyn InferenceProvider>,
        metrics: PrometheusHandle,
    ) -> Self {
        Self {
            config,
            provider,
            metrics,
        }
    }
}
