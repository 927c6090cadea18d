//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{compliance, documents, reference, search};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - the portal UI is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Core exchanges
        .route(
            "/api/search",
            post(search::search_documents).get(search::search_documents_query),
        )
        .route("/api/check-compliance", post(compliance::check_compliance))
        // Documents
        .route("/api/documents", get(documents::list_documents))
        .route("/api/documents/:id", get(documents::get_document))
        .route(
            "/api/documents/:id/validate",
            post(documents::validate_document),
        )
        .route("/api/compliance/stats", get(compliance::get_stats))
        // Reference tables
        .route("/api/laws", get(reference::list_laws))
        .route("/api/synonyms/:term", get(reference::get_synonyms))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": crate::NAME,
        "version": crate::VERSION,
        "startedAt": state.started_at.to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::PortalService;
    use crate::store::MemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let service = PortalService::with_store(Arc::new(MemoryStore::new()));
        let state = Arc::new(AppState::new(service));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
