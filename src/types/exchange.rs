//! Request and response shapes for the portal's two core exchanges

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Classification, ComplianceResult, Document, ScoredDocument};

/// Search request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub caller_id: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            caller_id: None,
        }
    }
}

/// Search response, documents sorted by descending relevance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub documents: Vec<ScoredDocument>,
    pub expanded_terms: Vec<String>,
    pub total_results: usize,
}

/// Compliance-check request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheckRequest {
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub document_data: Option<Document>,
}

/// Compliance-check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceCheckResponse {
    pub compliance: ComplianceResult,
    pub updated: bool,
}

/// Body of `POST /api/documents/:id/validate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub proposed_classification: Classification,
}

/// One recorded search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchLogEntry {
    pub search_query: String,
    pub search_results_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_id: Option<String>,
    pub searched_at: DateTime<Utc>,
}

/// Aggregate classification counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceStats {
    pub total_documents: usize,
    pub public_documents: usize,
    pub restricted_documents: usize,
    pub unreviewed_documents: usize,
    pub search_count: usize,
}
