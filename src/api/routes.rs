//! HTTP route handlers for Axum.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::api::types::{BatchResponse, HealthResponse, ProcessRequest};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

/// Run the full batch through classification and extraction.
///
/// Malformed bodies never reach the models; the JSON extractor rejects
/// them before this handler runs. Per-item failures land in the per-item
/// error field rather than the response status.
pub async fn process_texts(
    State(state): State<AppState>,
    Json(request): Json<ProcessRequest>,
) -> ApiResult<BatchResponse> {
    let texts = request.text.into_batch();
    info!(batch = texts.len(), "processing request");
    let results = state.processor.process(&texts);
    Ok(Json(BatchResponse { results }))
}

/// Model-load sanity check, not a performance or liveness metric.
pub async fn health(State(state): State<AppState>) -> ApiResult<HealthResponse> {
    match state.processor.probe() {
        Ok(()) => Ok(Json(HealthResponse::healthy())),
        Err(err) => {
            error!(error = %err, "health probe failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
        }
    }
}
