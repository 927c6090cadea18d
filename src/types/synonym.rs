//! Synonym group type

use serde::{Deserialize, Serialize};

/// Set of interchangeable terms sharing one category tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub primary: String,
    pub synonyms: Vec<String>,
    pub category: String,
}

impl SynonymGroup {
    pub fn new(primary: &str, synonyms: &[&str], category: &str) -> Self {
        Self {
            primary: primary.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
        }
    }

    /// Primary term followed by every synonym
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.synonyms.iter().map(|s| s.as_str()))
    }
}
