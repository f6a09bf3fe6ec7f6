use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use metrics::counter;
use service_core::error::AppError;

use crate::dtos::{AnalyzeRequest, AnalyzeResponse};
use crate::services::{incident_prompt, render_report, GenerationParams};
use crate::AppState;

pub const MISSING_QUERY: &str = "No query provided";
pub const MODEL_UNAVAILABLE: &str = "Failed to get a response from the model";

/// `POST /analyze`: prompt the model with the incident and return the HTML
/// report.
///
/// A body that is not a JSON object, or whose `query` is not a non-empty
/// string, is treated the same as one without a query.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(reason = %rejection.body_text(), "Unreadable analyze payload");
            AnalyzeRequest::default()
        }
    };

    let query = request
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!(MISSING_QUERY)))?;

    tracing::debug!(query = %query, ioc = ?request.ioc, "Received query");

    let prompt = incident_prompt(&query);
    let params = GenerationParams {
        temperature: state.config.inference.temperature,
    };

    let response_text = match state.provider.generate(&prompt, &params).await {
        Ok(text) => {
            counter!("inference_requests_total", "outcome" => "success").increment(1);
            text
        }
        Err(e) => {
            counter!("inference_requests_total", "outcome" => "failure").increment(1);
            tracing::error!(error = %e, "Error in generating response");
            return Err(AppError::UpstreamError(MODEL_UNAVAILABLE.to_string()));
        }
    };

    let report = render_report(&response_text, request.ioc.as_deref());

    tracing::debug!(report = %report, "Formatted response");

    Ok(Json(AnalyzeResponse { response: report }))
}
