//! Government Document Portal
//!
//! Synonym-expanded document search and legal-compliance scoring for
//! Indonesian government documents, served over a small REST API.
//!
//! # Features
//!
//! - **Query Expansion**: Bidirectional synonym table widens free-text queries
//! - **Relevance Scoring**: Matched terms, title and keyword boosts, capped at 100
//! - **Compliance Scoring**: Keyword-weighted rules from UU KIP and related laws
//! - **Injected Storage**: Retrieval and persistence behind a single trait
//!
//! # Modules
//!
//! - `types`: Core data structures (Document, LegalRule, ComplianceResult)
//! - `search`: Synonym table and query expansion engine
//! - `compliance`: Legal rule table and compliance checker
//! - `store`: Document store trait and in-memory JSONL implementation
//! - `service`: Request boundary composing engines and store
//! - `api`: Axum router and REST handlers
//! - `config`: Environment configuration
//! - `error`: Error taxonomy
//!
//! # Example
//!
//! ```
//! use gov_docs::{ComplianceChecker, Document, SynonymEngine};
//!
//! let synonyms = SynonymEngine::default();
//! let terms = synonyms.expand_query("dokumen perumahan");
//! assert!(terms.contains("housing"));
//!
//! let checker = ComplianceChecker::default();
//! let doc = Document::new("Laporan Investigasi Internal")
//!     .with_description("dugaan korupsi pengadaan");
//! assert!(!checker.check_compliance(&doc).is_public);
//! ```

pub mod api;
pub mod compliance;
pub mod config;
pub mod error;
pub mod search;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use compliance::ComplianceChecker;
pub use config::Config;
pub use error::{PortalError, PortalResult, StoreError, StoreResult};
pub use search::SynonymEngine;
pub use service::PortalService;
pub use store::{DocumentStore, MemoryStore};
pub use types::{
    Classification, ComplianceResult, Document, LegalRule, ScoredDocument, SearchRequest,
    SearchResponse, SynonymGroup, ValidationOutcome,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
