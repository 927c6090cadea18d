//! Error types for the document portal
//!
//! The scoring engines never fail; errors only arise at the request boundary
//! (missing input) and in the document store.

use thiserror::Error;

use crate::types::ComplianceResult;

/// Document store failure
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("document store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("document '{0}' not found")]
    NotFound(String),
}

/// Request-level failure
#[derive(Error, Debug)]
pub enum PortalError {
    /// Required input absent or blank (400)
    #[error("{0}")]
    MissingInput(String),

    /// Referenced document does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Verdict computed but could not be written back (500).
    /// The verdict is kept so it can still be returned to the caller.
    #[error("failed to update document: {source}")]
    PersistenceFailed {
        compliance: Box<ComplianceResult>,
        #[source]
        source: StoreError,
    },

    /// Any other store failure (500)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Blocking worker panicked or was cancelled (500)
    #[error("background task failed: {0}")]
    Task(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub type PortalResult<T> = Result<T, PortalError>;
