//! Document retrieval and persistence
//!
//! The scoring engines never touch storage. Everything they need is fetched
//! through [`DocumentStore`], which the binary backs with [`MemoryStore`].

mod atomic;
mod memory;

pub use memory::{MemoryStore, SEARCH_LOG_CAPACITY, SEARCH_LOG_FILE};

use crate::error::StoreResult;
use crate::types::{ClassificationUpdate, ComplianceStats, Document, SearchLogEntry};

/// Storage capability injected into the portal service
pub trait DocumentStore: Send + Sync {
    /// Documents where any term is a case-insensitive substring of title,
    /// description or content, or equals one of its keywords or synonyms
    fn find_candidates(&self, terms: &[String]) -> StoreResult<Vec<Document>>;

    /// Fetch a document by id
    fn get(&self, id: &str) -> StoreResult<Option<Document>>;

    /// Page through stored documents; returns the page and the total count
    fn list(&self, offset: usize, limit: usize) -> StoreResult<(Vec<Document>, usize)>;

    /// Write a compliance verdict back onto a stored document
    fn update_classification(&self, id: &str, update: ClassificationUpdate) -> StoreResult<()>;

    /// Append to the search log (failures never fail the search itself)
    fn record_search(&self, entry: SearchLogEntry) -> StoreResult<()>;

    /// Classification counts across stored documents
    fn stats(&self) -> StoreResult<ComplianceStats>;
}
