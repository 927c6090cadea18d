//! Search endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::run_blocking;
use crate::api::state::AppState;
use crate::types::SearchRequest;

/// Query parameters for `GET /api/search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query string
    pub q: Option<String>,
    #[serde(rename = "callerId")]
    pub caller_id: Option<String>,
}

/// POST /api/search - Search documents with synonym expansion
///
/// Results are sorted by descending relevance score.
pub async fn search_documents(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> impl IntoResponse {
    match run_blocking(&state, move |service| service.search(request)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /api/search - Same search driven by query parameters
pub async fn search_documents_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let request = SearchRequest {
        query: params.q,
        caller_id: params.caller_id,
    };

    match run_blocking(&state, move |service| service.search(request)).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}
