//! HTTP API for the document portal
//!
//! REST endpoints exposing search, compliance checking and the reference tables.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
