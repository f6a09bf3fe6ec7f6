use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde_json::{json, Value};
use service_core::error::AppError;

use crate::AppState;

const SERVICE_NAME: &str = "ioc-analyzer";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub model: &'a str,
    pub version: &'a str,
}

/// Analyst page that posts to `/analyze` and displays the report.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexTemplate {
        model: &state.config.inference.model,
        version: env!("CARGO_PKG_VERSION"),
    }
    .render()
    .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

    Ok(Html(page))
}

/// Liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: the inference server must answer.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.provider.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Inference provider not ready");
        AppError::ServiceUnavailable
    })?;

    Ok(StatusCode::OK)
}
