//! Document endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{ApiResponse, PaginationParams};
use crate::api::state::AppState;
use crate::types::ValidateRequest;

/// GET /api/documents - List documents with pagination
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> impl IntoResponse {
    match state
        .service
        .list_documents(params.offset, params.normalized_limit())
    {
        Ok((documents, total)) => (
            StatusCode::OK,
            Json(ApiResponse::with_total(documents, total)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/documents/:id - Get single document
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    // Path is already percent-decoded once
    match state.service.get_document(&id) {
        Ok(document) => (StatusCode::OK, Json(ApiResponse::new(document))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /api/documents/:id/validate - Check a proposed public/restricted label
pub async fn validate_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<ValidateRequest>,
) -> impl IntoResponse {
    match state
        .service
        .validate_document(&id, request.proposed_classification)
    {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => e.into_response(),
    }
}
