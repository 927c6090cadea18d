//! Data types for the document portal
//!
//! This module contains all the core data structures used throughout the application.

mod document;
mod exchange;
mod legal;
mod synonym;

pub use document::{ClassificationUpdate, Document, ScoredDocument};
pub use exchange::{
    ComplianceCheckRequest, ComplianceCheckResponse, ComplianceStats, SearchLogEntry,
    SearchRequest, SearchResponse, ValidateRequest,
};
pub use legal::{Classification, ComplianceResult, LegalRule, ValidationOutcome};
pub use synonym::SynonymGroup;
