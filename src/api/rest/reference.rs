//! Read-only views of the synonym and legal tables

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::ApiResponse;
use crate::api::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LawsParams {
    pub category: Option<String>,
}

/// GET /api/laws - Legal rules applicable to a category (all rules without one)
pub async fn list_laws(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LawsParams>,
) -> impl IntoResponse {
    let rules = state.service.applicable_laws(params.category.as_deref());
    let total = rules.len();
    (StatusCode::OK, Json(ApiResponse::with_total(rules, total)))
}

#[derive(Debug, Serialize)]
pub struct SynonymLookup {
    pub term: String,
    pub synonyms: Vec<String>,
}

/// GET /api/synonyms/:term - Synonyms of a single term
pub async fn get_synonyms(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> impl IntoResponse {
    let synonyms = state.service.synonyms().get_synonyms(&term);

    (
        StatusCode::OK,
        Json(ApiResponse::new(SynonymLookup {
            term: term.to_lowercase(),
            synonyms,
        })),
    )
}
