//! Application startup and lifecycle management.

use crate::config::AnalyzerConfig;
use crate::handlers::{analyze, health_check, index, metrics::metrics, readiness_check};
use crate::services::providers::ollama::OllamaProvider;
use crate::services::InferenceProvider;
use crate::AppState;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application against the configured inference server.
    pub async fn build(config: AnalyzerConfig, metrics: PrometheusHandle) -> Result<Self, AppError> {
        let provider = OllamaProvider::new(config.inference.clone())
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        tracing::info!(
            url = %config.inference.url,
            model = %config.inference.model,
            "Initialized inference provider"
        );

        Self::with_provider(config, Arc::new(provider), metrics).await
    }

    /// Build the application with an explicit provider (port 0 = random port).
    pub async fn with_provider(
        config: AnalyzerConfig,
        provider: Arc<dyn InferenceProvider>,
        metrics: PrometheusHandle,
    ) -> Result<Self, AppError> {
        let address = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("IOC analyzer: HTTP on {}:{}", config.common.host, port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, provider, metrics),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
