//! Compliance endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{run_blocking, ApiResponse};
use crate::api::state::AppState;
use crate::types::ComplianceCheckRequest;

/// POST /api/check-compliance - Score a document against the legal rules
///
/// With `documentId` the verdict is also written back to the stored document,
/// which rewrites the documents file, so the call runs on the blocking pool.
pub async fn check_compliance(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ComplianceCheckRequest>,
) -> impl IntoResponse {
    match run_blocking(&state, move |service| service.check_compliance(request)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/compliance/stats - Classification counts across stored documents
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.service.stats() {
        Ok(stats) => (StatusCode::OK, Json(ApiResponse::new(stats))).into_response(),
        Err(e) => e.into_response(),
    }
}
