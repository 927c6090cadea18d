//! Query expansion with synonym matching
//!
//! This module provides:
//! - The static Indonesian government synonym table
//! - A bidirectional synonym index built once at startup
//! - Query expansion and relevance scoring over documents

mod engine;
mod synonyms;

pub use engine::{
    DocumentScore, SynonymEngine, KEYWORD_MATCH_BONUS, MAX_RELEVANCE_SCORE, TITLE_MATCH_BONUS,
};
pub use synonyms::{default_synonym_groups, SYNONYM_TABLE};
