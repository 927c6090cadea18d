//! REST API module for HTTP endpoints
//!
//! - `POST /api/search`, `GET /api/search` - Synonym-expanded document search
//! - `POST /api/check-compliance` - Legal compliance verdict for a document
//! - `GET /api/documents` - List documents with pagination
//! - `GET /api/documents/:id` - Get single document
//! - `POST /api/documents/:id/validate` - Check a proposed classification
//! - `GET /api/compliance/stats` - Classification counts
//! - `GET /api/laws` - Legal rules, optionally filtered by category
//! - `GET /api/synonyms/:term` - Synonyms of a term

pub mod compliance;
pub mod documents;
pub mod reference;
pub mod search;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::state::AppState;
use crate::error::{PortalError, PortalResult};
use crate::service::PortalService;

/// Common pagination parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Maximum number of items to return (default: 100, max: 1000)
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of items to skip
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    100
}

impl PaginationParams {
    /// Normalize limit to max 1000
    pub fn normalized_limit(&self) -> usize {
        self.limit.min(1000)
    }
}

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for paginated responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// Run a service call that may touch the disk on the blocking pool
pub async fn run_blocking<T, F>(state: &Arc<AppState>, call: F) -> PortalResult<T>
where
    F: FnOnce(&PortalService) -> PortalResult<T> + Send + 'static,
    T: Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || call(&state.service))
        .await
        .map_err(|e| PortalError::Task(e.to_string()))?
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PortalError::MissingInput(msg) => (StatusCode::BAD_REQUEST, ApiError::bad_request(msg)),
            PortalError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::not_found(msg)),
            PortalError::PersistenceFailed { compliance, source } => {
                tracing::error!(error = %source, "database update error");
                let mut body = ApiError::new("PERSISTENCE_FAILED", "Failed to update document");
                body.details = Some(json!({ "compliance": compliance }));
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            PortalError::Store(source) => {
                // Store details stay in the log
                tracing::error!(error = %source, "document store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::internal("Internal server error"),
                )
            }
            PortalError::Task(reason) => {
                tracing::error!(error = %reason, "request worker failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::internal("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
