//! Shared application state

use chrono::{DateTime, Utc};

use crate::service::PortalService;

/// State shared by every handler behind an `Arc`
pub struct AppState {
    /// Engines and document store
    pub service: PortalService,
    /// Process start, reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: PortalService) -> Self {
        Self {
            service,
            started_at: Utc::now(),
        }
    }
}
