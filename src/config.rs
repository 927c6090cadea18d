//! Runtime configuration from environment variables
//!
//! ```bash
//! PORTAL_HOST=127.0.0.1
//! PORTAL_PORT=8080
//! PORTAL_DOCUMENTS_PATH=/var/lib/portal/documents.jsonl
//! PORTAL_PERSIST=false
//! RUST_LOG=gov_docs=debug
//! ```

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3030;
pub const DEFAULT_DOCUMENTS_PATH: &str = "data/documents.jsonl";

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSONL file seeding the document store
    pub documents_path: PathBuf,
    /// Write classification updates back to `documents_path`
    pub persist: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            documents_path: PathBuf::from(DEFAULT_DOCUMENTS_PATH),
            persist: true,
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(|key| env::var(key).ok(), &current_dir)
    }

    /// Read configuration through an arbitrary variable lookup.
    /// Relative document paths are resolved against `base_dir`.
    pub fn from_lookup<F>(lookup: F, base_dir: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("PORTAL_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORTAL_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, fallback = DEFAULT_PORT, "invalid PORTAL_PORT, using default");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let documents_path = lookup("PORTAL_DOCUMENTS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.documents_path);
        let documents_path = if documents_path.is_absolute() {
            documents_path
        } else {
            base_dir.join(documents_path)
        };

        let persist = lookup("PORTAL_PERSIST")
            .map(|v| v.trim().to_lowercase() != "false")
            .unwrap_or(defaults.persist);

        Self {
            host,
            port,
            documents_path,
            persist,
        }
    }

    /// Address to bind; falls back to all interfaces on an unparseable host
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| {
                tracing::warn!(host = %self.host, "invalid PORTAL_HOST, binding all interfaces");
                SocketAddr::from(([0, 0, 0, 0], self.port))
            })
    }
}
