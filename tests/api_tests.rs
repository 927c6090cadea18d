//! HTTP-level tests for the REST API

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use gov_docs::api::{create_router, AppState};
use gov_docs::{Document, MemoryStore, PortalService};

fn app() -> Router {
    let documents = vec![
        Document::new("Dokumen Perumahan Rakyat")
            .with_id("rumah-1")
            .with_keywords(&["perumahan", "housing"]),
        Document::new("Laporan Investigasi Internal")
            .with_id("inv 2")
            .with_description("dugaan korupsi pengadaan"),
    ];
    let service = PortalService::with_store(Arc::new(MemoryStore::with_documents(documents)));
    create_router(Arc::new(AppState::new(service)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_search_endpoint() {
    let (status, body) = send(
        app(),
        post_json("/api/search", json!({ "query": "dokumen perumahan", "callerId": "emp-7" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalResults"], 1);
    assert_eq!(body["documents"][0]["id"], "rumah-1");
    assert!(body["documents"][0]["relevanceScore"].as_f64().unwrap() > 50.0);
    let terms: Vec<&str> = body["expandedTerms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    for term in ["perumahan", "housing", "rumah", "dokumen", "document", "berkas"] {
        assert!(terms.contains(&term), "missing {}", term);
    }
}

#[tokio::test]
async fn test_search_get_variant() {
    let (status, body) = send(app(), get("/api/search?q=housing")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["documents"][0]["id"], "rumah-1");
}

#[tokio::test]
async fn test_search_requires_query() {
    let (status, body) = send(app(), post_json("/api/search", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query is required");
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_check_compliance_without_id() {
    let (status, body) = send(
        app(),
        post_json(
            "/api/check-compliance",
            json!({
                "documentData": {
                    "title": "Laporan Investigasi Internal",
                    "description": "dugaan korupsi pengadaan"
                }
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], false);
    assert_eq!(body["compliance"]["isPublic"], false);
    assert!(body["compliance"]["restrictionReason"]
        .as_str()
        .unwrap()
        .contains("Pasal 17 huruf (g)"));
    assert!(body["compliance"]["matchedRules"]
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r["id"] == "UU14-2008-ART17G"));
}

#[tokio::test]
async fn test_check_compliance_updates_document() {
    let app = app();
    let (status, body) = send(
        app.clone(),
        post_json(
            "/api/check-compliance",
            json!({
                "documentId": "rumah-1",
                "documentData": { "title": "Dokumen Perumahan Rakyat", "keywords": ["perumahan", "housing"] }
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], true);

    let (status, body) = send(app, get("/api/documents/rumah-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_public"], true);
    assert!(body["data"]["legal_basis"]
        .as_str()
        .unwrap()
        .contains("UU No. 1 Tahun 2011"));
}

#[tokio::test]
async fn test_check_compliance_errors() {
    let (status, body) = send(app(), post_json("/api/check-compliance", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Document data is required");

    let (status, _) = send(
        app(),
        post_json(
            "/api/check-compliance",
            json!({ "documentId": "missing", "documentData": { "title": "x" } }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_documents_listing_and_lookup() {
    let (status, body) = send(app(), get("/api/documents?limit=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // percent-encoded id
    let (status, body) = send(app(), get("/api/documents/inv%202")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Laporan Investigasi Internal");

    let (status, body) = send(app(), get("/api/documents/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_validate_classification_endpoint() {
    let (status, body) = send(
        app(),
        post_json(
            "/api/documents/inv%202/validate",
            json!({ "proposedClassification": "public" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isValid"], false);
    assert_eq!(body["recommendation"], "restricted");
    assert!(body["legalJustification"]
        .as_str()
        .unwrap()
        .contains("Pasal 17 huruf (g)"));
}

#[tokio::test]
async fn test_reference_endpoints() {
    let (status, body) = send(app(), get("/api/laws?category=taxation")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["id"], "UU28-2009-ART77");

    let (status, body) = send(app(), get("/api/laws")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 10);

    let (status, body) = send(app(), get("/api/synonyms/PBB")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["term"], "pbb");
    assert!(body["data"]["synonyms"]
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s == "pajak bumi bangunan"));
}

#[tokio::test]
async fn test_stats_endpoint_counts_searches() {
    let app = app();
    send(app.clone(), post_json("/api/search", json!({ "query": "pajak" }))).await;

    let (status, body) = send(app, get("/api/compliance/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalDocuments"], 2);
    assert_eq!(body["data"]["searchCount"], 1);
    assert_eq!(body["data"]["unreviewedDocuments"], 2);
    assert_eq!(body["data"]["restrictedDocuments"], 0);
}

#[tokio::test]
async fn test_stats_after_restricted_verdict() {
    let app = app();
    let (status, _) = send(
        app.clone(),
        post_json(
            "/api/check-compliance",
            json!({
                "documentId": "inv 2",
                "documentData": {
                    "title": "Laporan Investigasi Internal",
                    "description": "dugaan korupsi pengadaan"
                }
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app, get("/api/compliance/stats")).await;
    assert_eq!(body["data"]["restrictedDocuments"], 1);
    assert_eq!(body["data"]["unreviewedDocuments"], 1);
}

#[tokio::test]
async fn test_document_id_decoded_once() {
    let documents = vec![
        Document::new("Kode Arsip").with_id("arsip%41"),
        Document::new("Arsip A").with_id("arsipA"),
    ];
    let service = PortalService::with_store(Arc::new(MemoryStore::with_documents(documents)));
    let app = create_router(Arc::new(AppState::new(service)));

    // "%25" is the escaped percent sign, so the id is the literal "arsip%41"
    let (status, body) = send(app.clone(), get("/api/documents/arsip%2541")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Kode Arsip");

    let (status, body) = send(app, get("/api/documents/arsip%41")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Arsip A");
}
