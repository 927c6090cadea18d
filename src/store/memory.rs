//! In-memory document store with optional JSONL persistence

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::types::{ClassificationUpdate, ComplianceStats, Document, SearchLogEntry};

use super::atomic::{append_line, atomic_write_with};
use super::DocumentStore;

/// Most recent searches kept in memory
pub const SEARCH_LOG_CAPACITY: usize = 1000;

/// Search log written next to the documents file when persisting
pub const SEARCH_LOG_FILE: &str = "search_log.jsonl";

/// Bounded window of recent searches plus the all-time count
#[derive(Debug, Default)]
struct SearchLog {
    recent: VecDeque<SearchLogEntry>,
    total: usize,
}

impl SearchLog {
    fn push(&mut self, entry: SearchLogEntry) {
        if self.recent.len() == SEARCH_LOG_CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(entry);
        self.total += 1;
    }
}

/// Documents held in memory, one JSON object per line on disk
pub struct MemoryStore {
    documents: RwLock<Vec<Document>>,
    search_log: RwLock<SearchLog>,
    file_path: Option<PathBuf>,
    search_log_path: Option<PathBuf>,
}

impl MemoryStore {
    /// Empty store with no backing file
    pub fn new() -> Self {
        Self::with_documents(Vec::new())
    }

    /// Store seeded with documents, not persisted
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(assign_missing_ids(documents)),
            search_log: RwLock::new(SearchLog::default()),
            file_path: None,
            search_log_path: None,
        }
    }

    /// Load documents from a JSONL file (or start empty if it does not exist).
    /// With `persist`, classification updates are written back and searches are
    /// appended to [`SEARCH_LOG_FILE`] in the same directory.
    pub fn from_file<P: AsRef<Path>>(path: P, persist: bool) -> StoreResult<Self> {
        let path = path.as_ref();
        let documents = load_documents(path)?;
        let search_log_path = path.with_file_name(SEARCH_LOG_FILE);
        let search_log = if persist {
            load_search_log(&search_log_path)?
        } else {
            SearchLog::default()
        };
        tracing::info!(
            path = %path.display(),
            documents = documents.len(),
            searches = search_log.total,
            persist,
            "document store loaded"
        );

        Ok(Self {
            documents: RwLock::new(assign_missing_ids(documents)),
            search_log: RwLock::new(search_log),
            file_path: persist.then(|| path.to_path_buf()),
            search_log_path: persist.then_some(search_log_path),
        })
    }

    /// Snapshot of the most recent searches, oldest first
    pub fn search_log(&self) -> Vec<SearchLogEntry> {
        self.search_log.read().recent.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    fn persist(&self, documents: &[Document]) -> StoreResult<()> {
        let Some(path) = &self.file_path else {
            return Ok(());
        };

        atomic_write_with(path, |file| {
            for document in documents {
                writeln!(file, "{}", serde_json::to_string(document)?)?;
            }
            Ok(())
        })?;
        tracing::debug!(path = %path.display(), documents = documents.len(), "document store persisted");
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn find_candidates(&self, terms: &[String]) -> StoreResult<Vec<Document>> {
        let terms: Vec<String> = terms
            .iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let documents = self.documents.read();
        Ok(documents
            .iter()
            .filter(|doc| is_candidate(doc, &terms))
            .cloned()
            .collect())
    }

    fn get(&self, id: &str) -> StoreResult<Option<Document>> {
        Ok(self
            .documents
            .read()
            .iter()
            .find(|doc| doc.id.as_deref() == Some(id))
            .cloned())
    }

    fn list(&self, offset: usize, limit: usize) -> StoreResult<(Vec<Document>, usize)> {
        let documents = self.documents.read();
        let page = documents.iter().skip(offset).take(limit).cloned().collect();
        Ok((page, documents.len()))
    }

    fn update_classification(&self, id: &str, update: ClassificationUpdate) -> StoreResult<()> {
        // Held across the file write so concurrent updates persist in order
        let mut documents = self.documents.write();
        let position = documents
            .iter()
            .position(|doc| doc.id.as_deref() == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut updated = documents.clone();
        let doc = &mut updated[position];
        doc.is_public = update.is_public;
        doc.legal_basis = update.legal_basis;
        doc.legal_restriction_reason = update.legal_restriction_reason;
        doc.updated_at = Some(update.updated_at);

        // Only commit in memory once the file write succeeded
        self.persist(&updated)?;
        *documents = updated;
        Ok(())
    }

    fn record_search(&self, entry: SearchLogEntry) -> StoreResult<()> {
        let mut log = self.search_log.write();
        if let Some(path) = &self.search_log_path {
            append_line(path, &serde_json::to_string(&entry)?)?;
        }
        log.push(entry);
        Ok(())
    }

    fn stats(&self) -> StoreResult<ComplianceStats> {
        let documents = self.documents.read();
        let public_documents = documents.iter().filter(|d| d.is_public).count();
        let restricted_documents = documents
            .iter()
            .filter(|d| d.is_reviewed() && !d.is_public)
            .count();
        Ok(ComplianceStats {
            total_documents: documents.len(),
            public_documents,
            restricted_documents,
            unreviewed_documents: documents.iter().filter(|d| !d.is_reviewed()).count(),
            search_count: self.search_log.read().total,
        })
    }
}

fn is_candidate(doc: &Document, terms: &[String]) -> bool {
    let title = doc.title.to_lowercase();
    let description = doc.description.to_lowercase();
    let content = doc.content.to_lowercase();
    let tags: Vec<String> = doc
        .keywords
        .iter()
        .chain(doc.synonyms.iter())
        .map(|t| t.to_lowercase())
        .collect();

    terms.iter().any(|term| {
        title.contains(term.as_str())
            || description.contains(term.as_str())
            || content.contains(term.as_str())
            || tags.iter().any(|tag| tag == term)
    })
}

fn load_documents(path: &Path) -> StoreResult<Vec<Document>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mut documents = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Document>(line) {
            Ok(doc) => documents.push(doc),
            Err(e) => tracing::warn!(
                path = %path.display(),
                line = line_no + 1,
                error = %e,
                "skipping malformed document line"
            ),
        }
    }

    Ok(documents)
}

/// Give id-less documents `doc-<n>`, skipping ids already taken
fn assign_missing_ids(mut documents: Vec<Document>) -> Vec<Document> {
    let mut taken: HashSet<String> = documents.iter().filter_map(|d| d.id.clone()).collect();

    for (i, doc) in documents.iter_mut().enumerate() {
        if doc.id.is_some() {
            continue;
        }
        let mut n = i + 1;
        while taken.contains(&format!("doc-{}", n)) {
            n += 1;
        }
        let id = format!("doc-{}", n);
        taken.insert(id.clone());
        doc.id = Some(id);
    }
    documents
}

/// Recent entries and total count from an existing search log
fn load_search_log(path: &Path) -> StoreResult<SearchLog> {
    let mut log = SearchLog::default();
    if !path.exists() {
        return Ok(log);
    }

    let content = fs::read_to_string(path)?;
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<SearchLogEntry>(line) {
            Ok(entry) => log.push(entry),
            Err(e) => tracing::warn!(
                path = %path.display(),
                line = line_no + 1,
                error = %e,
                "skipping malformed search log line"
            ),
        }
    }

    Ok(log)
}
