//! Request-handling boundary
//!
//! `PortalService` validates input, composes the two scoring engines with the
//! injected document store, and maps store failures to [`PortalError`].

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::Utc;
use rayon::prelude::*;

use crate::compliance::ComplianceChecker;
use crate::error::{PortalError, PortalResult, StoreError};
use crate::search::SynonymEngine;
use crate::store::DocumentStore;
use crate::types::{
    Classification, ClassificationUpdate, ComplianceCheckRequest, ComplianceCheckResponse,
    ComplianceResult, ComplianceStats, Document, LegalRule, ScoredDocument, SearchLogEntry,
    SearchRequest, SearchResponse, ValidationOutcome,
};

/// Candidate count above which scoring fans out across threads
const PARALLEL_SCORING_THRESHOLD: usize = 256;

/// Composition of the engines and the document store
pub struct PortalService {
    synonyms: SynonymEngine,
    compliance: ComplianceChecker,
    store: Arc<dyn DocumentStore>,
}

impl PortalService {
    pub fn new(
        synonyms: SynonymEngine,
        compliance: ComplianceChecker,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            synonyms,
            compliance,
            store,
        }
    }

    /// Service over the built-in synonym and legal tables
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(SynonymEngine::default(), ComplianceChecker::default(), store)
    }

    pub fn synonyms(&self) -> &SynonymEngine {
        &self.synonyms
    }

    pub fn compliance(&self) -> &ComplianceChecker {
        &self.compliance
    }

    /// Expand the query, fetch candidates and rank them by relevance
    pub fn search(&self, request: SearchRequest) -> PortalResult<SearchResponse> {
        let query = request
            .query
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| PortalError::MissingInput("Query is required".to_string()))?;

        let expanded = self.synonyms.expand_query(&query);
        let expanded_terms: Vec<String> = expanded.iter().cloned().collect();
        tracing::info!(query = %query, terms = ?expanded_terms, "expanded search terms");

        let candidates = self.store.find_candidates(&expanded_terms)?;

        let score = |document: Document| {
            let scored = self.synonyms.score_expanded(&query, &expanded, &document);
            ScoredDocument {
                document,
                relevance_score: scored.relevance_score,
                matched_synonyms: scored.matched_terms.into_iter().collect(),
            }
        };

        let mut documents: Vec<ScoredDocument> = if candidates.len() > PARALLEL_SCORING_THRESHOLD {
            candidates.into_par_iter().map(score).collect()
        } else {
            candidates.into_iter().map(score).collect()
        };

        // Stable sort keeps store order for equal scores
        documents.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });

        for doc in &documents {
            tracing::debug!(
                title = %doc.document.title,
                score = doc.relevance_score,
                matches = ?doc.matched_synonyms,
                "scored search result"
            );
        }

        let entry = SearchLogEntry {
            search_query: query,
            search_results_count: documents.len(),
            caller_id: request.caller_id,
            searched_at: Utc::now(),
        };
        if let Err(e) = self.store.record_search(entry) {
            tracing::warn!(error = %e, "failed to record search");
        }

        Ok(SearchResponse {
            total_results: documents.len(),
            documents,
            expanded_terms,
        })
    }

    /// Score a document and, when an id is given, write the verdict back
    pub fn check_compliance(
        &self,
        request: ComplianceCheckRequest,
    ) -> PortalResult<ComplianceCheckResponse> {
        let document = request
            .document_data
            .ok_or_else(|| PortalError::MissingInput("Document data is required".to_string()))?;

        let compliance = self.compliance.check_compliance(&document);
        tracing::info!(
            title = %document.title,
            is_public = compliance.is_public,
            confidence = compliance.confidence,
            matched_rules = compliance.matched_rules.len(),
            "legal compliance check"
        );

        let Some(document_id) = request.document_id else {
            return Ok(ComplianceCheckResponse {
                compliance,
                updated: false,
            });
        };

        let update = classification_update(&compliance);
        match self.store.update_classification(&document_id, update) {
            Ok(()) => Ok(ComplianceCheckResponse {
                compliance,
                updated: true,
            }),
            Err(StoreError::NotFound(id)) => {
                Err(PortalError::NotFound(format!("Document '{}' not found", id)))
            }
            Err(source) => Err(PortalError::PersistenceFailed {
                compliance: Box::new(compliance),
                source,
            }),
        }
    }

    /// Check a proposed label for a stored document
    pub fn validate_document(
        &self,
        id: &str,
        proposed: Classification,
    ) -> PortalResult<ValidationOutcome> {
        let document = self.get_document(id)?;
        let outcome = self.compliance.validate_classification(&document, proposed);
        tracing::info!(
            id,
            proposed = %proposed,
            recommendation = %outcome.recommendation,
            valid = outcome.is_valid,
            "classification validated"
        );
        Ok(outcome)
    }

    pub fn get_document(&self, id: &str) -> PortalResult<Document> {
        self.store
            .get(id)?
            .ok_or_else(|| PortalError::NotFound(format!("Document '{}' not found", id)))
    }

    pub fn list_documents(&self, offset: usize, limit: usize) -> PortalResult<(Vec<Document>, usize)> {
        Ok(self.store.list(offset, limit)?)
    }

    pub fn stats(&self) -> PortalResult<ComplianceStats> {
        Ok(self.store.stats()?)
    }

    /// Legal rules for a category, or every rule when none is given
    pub fn applicable_laws(&self, category: Option<&str>) -> Vec<LegalRule> {
        match category.filter(|c| !c.trim().is_empty()) {
            Some(category) => self
                .compliance
                .applicable_laws(category)
                .into_iter()
                .cloned()
                .collect(),
            None => self.compliance.rules().to_vec(),
        }
    }
}

fn classification_update(compliance: &ComplianceResult) -> ClassificationUpdate {
    ClassificationUpdate {
        is_public: compliance.is_public,
        legal_basis: compliance
            .is_public
            .then(|| compliance.legal_basis.clone()),
        legal_restriction_reason: if compliance.is_public {
            None
        } else {
            compliance.restriction_reason.clone()
        },
        updated_at: Utc::now(),
    }
}
