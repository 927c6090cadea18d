//! Query expansion and relevance scoring
//!
//! The engine is built once from the synonym groups and is read-only afterwards,
//! so a single instance can be shared across request handlers and threads.

use std::collections::{BTreeSet, HashMap};

use crate::types::{Document, SynonymGroup};

use super::synonyms::default_synonym_groups;

/// Bonus when the raw query appears in the document title
pub const TITLE_MATCH_BONUS: f64 = 50.0;

/// Bonus per document keyword containing an expanded term
pub const KEYWORD_MATCH_BONUS: f64 = 10.0;

/// Upper bound of a relevance score
pub const MAX_RELEVANCE_SCORE: f64 = 100.0;

/// Relevance score together with the expanded terms that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentScore {
    pub relevance_score: f64,
    pub matched_terms: BTreeSet<String>,
}

/// Synonym table plus its derived bidirectional index
#[derive(Debug, Clone)]
pub struct SynonymEngine {
    groups: Vec<SynonymGroup>,
    /// lowercased terms per group, same order as `groups`
    group_terms: Vec<Vec<String>>,
    /// term → every other term sharing a group with it
    index: HashMap<String, BTreeSet<String>>,
}

impl SynonymEngine {
    /// Build the engine from a list of groups
    pub fn new(groups: Vec<SynonymGroup>) -> Self {
        let group_terms: Vec<Vec<String>> = groups
            .iter()
            .map(|group| group.terms().map(|t| t.to_lowercase()).collect())
            .collect();

        let mut index: HashMap<String, BTreeSet<String>> = HashMap::new();
        for terms in &group_terms {
            for term in terms {
                let entry = index.entry(term.clone()).or_default();
                entry.extend(terms.iter().filter(|other| *other != term).cloned());
            }
        }

        Self {
            groups,
            group_terms,
            index,
        }
    }

    /// Groups the engine was built from
    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    /// Synonyms of a single term, sorted. Unknown terms have none.
    pub fn get_synonyms(&self, term: &str) -> Vec<String> {
        self.index
            .get(&term.to_lowercase())
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Expand a free-text query into lowercase search terms
    ///
    /// Blank queries expand to nothing.
    pub fn expand_query(&self, query: &str) -> BTreeSet<String> {
        let mut expanded = BTreeSet::new();
        let query_lower = query.to_lowercase();
        if query_lower.trim().is_empty() {
            return expanded;
        }

        expanded.insert(query_lower.clone());

        for word in query_lower.split_whitespace() {
            expanded.insert(word.to_string());
            if let Some(synonyms) = self.index.get(word) {
                expanded.extend(synonyms.iter().cloned());
            }
        }

        // Multi-word terms: pull in a whole group when the query overlaps any of its terms
        for terms in &self.group_terms {
            let overlaps = terms
                .iter()
                .any(|term| query_lower.contains(term.as_str()) || term.contains(&query_lower));
            if overlaps {
                expanded.extend(terms.iter().cloned());
            }
        }

        expanded
    }

    /// Expanded terms that occur in the document's title, description, keywords or synonyms
    pub fn find_matching_synonyms(&self, query: &str, document: &Document) -> BTreeSet<String> {
        let expanded = self.expand_query(query);
        matching_terms(&expanded, document)
    }

    /// Relevance of a document for a query, in `[0, 100]`
    pub fn calculate_relevance_score(&self, query: &str, document: &Document) -> f64 {
        self.score_document(query, document).relevance_score
    }

    /// Score and matched terms in one pass over the expanded query
    pub fn score_document(&self, query: &str, document: &Document) -> DocumentScore {
        let expanded = self.expand_query(query);
        self.score_expanded(query, &expanded, document)
    }

    /// Score against an already expanded query
    pub fn score_expanded(
        &self,
        query: &str,
        expanded: &BTreeSet<String>,
        document: &Document,
    ) -> DocumentScore {
        let matched_terms = matching_terms(expanded, document);

        if expanded.is_empty() {
            return DocumentScore {
                relevance_score: 0.0,
                matched_terms,
            };
        }

        let mut score = matched_terms.len() as f64 / expanded.len() as f64 * 100.0;

        if document
            .title
            .to_lowercase()
            .contains(&query.to_lowercase())
        {
            score += TITLE_MATCH_BONUS;
        }

        let keyword_matches = document
            .keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|keyword| expanded.iter().any(|term| keyword.contains(term.as_str())))
            .count();
        score += keyword_matches as f64 * KEYWORD_MATCH_BONUS;

        DocumentScore {
            relevance_score: score.min(MAX_RELEVANCE_SCORE),
            matched_terms,
        }
    }
}

impl Default for SynonymEngine {
    fn default() -> Self {
        Self::new(default_synonym_groups())
    }
}

/// Lowercased blob of the fields searched for synonyms
fn searchable_text(document: &Document) -> String {
    let mut parts = vec![document.title.as_str(), document.description.as_str()];
    parts.extend(document.keywords.iter().map(|s| s.as_str()));
    parts.extend(document.synonyms.iter().map(|s| s.as_str()));
    parts.join(" ").to_lowercase()
}

fn matching_terms(expanded: &BTreeSet<String>, document: &Document) -> BTreeSet<String> {
    let text = searchable_text(document);
    expanded
        .iter()
        .filter(|term| text.contains(term.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SynonymEngine {
        SynonymEngine::default()
    }

    #[test]
    fn test_expand_includes_lowercased_query() {
        let expanded = engine().expand_query("Laporan Tahunan");
        assert!(expanded.contains("laporan tahunan"));
        assert!(expanded.contains("laporan"));
        assert!(expanded.contains("tahunan"));
    }

    #[test]
    fn test_expand_dokumen_perumahan() {
        let expanded = engine().expand_query("dokumen perumahan");
        for term in ["perumahan", "housing", "rumah", "dokumen", "document", "berkas"] {
            assert!(expanded.contains(term), "missing {}", term);
        }
    }

    #[test]
    fn test_blank_query_expands_to_nothing() {
        assert!(engine().expand_query("").is_empty());
        assert!(engine().expand_query("   \t").is_empty());
    }

    #[test]
    fn test_synonyms_union_across_groups() {
        // "surat" is a synonym in the dokumen group and primary of its own group
        let synonyms = engine().get_synonyms("surat");
        assert!(synonyms.contains(&"document".to_string()));
        assert!(synonyms.contains(&"letter".to_string()));
        assert!(!synonyms.contains(&"surat".to_string()));
    }

    #[test]
    fn test_synonyms_symmetric_within_group() {
        let engine = engine();
        for group in engine.groups() {
            for a in group.terms() {
                for b in engine.get_synonyms(a) {
                    assert!(
                        engine.get_synonyms(&b).contains(&a.to_lowercase()),
                        "{} -> {} not symmetric",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_get_synonyms_case_insensitive_and_unknown() {
        let engine = engine();
        assert!(engine.get_synonyms("pbb").contains(&"pajak tanah".to_string()));
        assert_eq!(engine.get_synonyms("PBB"), engine.get_synonyms("pbb"));
        assert!(engine.get_synonyms("zzz").is_empty());
    }

    #[test]
    fn test_multiword_term_pulls_group() {
        let expanded = engine().expand_query("tarif pajak tanah");
        // "pajak tanah" belongs to the PBB group
        assert!(expanded.contains("pbb"));
        assert!(expanded.contains("property tax"));
    }

    #[test]
    fn test_find_matching_synonyms() {
        let doc = Document::new("Data Hunian Kota")
            .with_description("Rekap berkas permohonan")
            .with_keywords(&["housing"]);
        let matched = engine().find_matching_synonyms("perumahan", &doc);
        assert!(matched.contains("hunian"));
        assert!(matched.contains("housing"));
        assert!(!matched.contains("perumahan"));
    }

    #[test]
    fn test_content_not_searched_for_synonyms() {
        let doc = Document::new("Laporan").with_content("perumahan rakyat");
        assert!(engine().find_matching_synonyms("perumahan", &doc).is_empty());
    }

    #[test]
    fn test_relevance_title_bonus() {
        let engine = SynonymEngine::new(vec![]);
        let doc = Document::new("Rencana Induk");
        // all three expanded terms match, plus the title bonus, clamped
        assert_eq!(engine.calculate_relevance_score("rencana induk", &doc), 100.0);

        let other = Document::new("Lainnya").with_description("rencana induk");
        // base 3/3 * 100 without the title bonus
        assert_eq!(engine.calculate_relevance_score("rencana induk", &other), 100.0);
    }

    #[test]
    fn test_relevance_partial_base_score() {
        let engine = SynonymEngine::new(vec![]);
        // expanded: {"alpha beta", "alpha", "beta"}; only "alpha" matches
        let doc = Document::new("x").with_description("alpha");
        let score = engine.calculate_relevance_score("alpha beta", &doc);
        assert!((score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_relevance_keyword_bonus() {
        let engine = SynonymEngine::new(vec![]);
        // expanded: {"alpha beta", "alpha", "beta"}
        let doc = Document::new("x").with_keywords(&["alphabet", "gamma"]);
        let score = engine.calculate_relevance_score("alpha beta", &doc);
        // "alpha" matched via keyword text: 1/3 * 100 + 10 for one keyword
        assert!((score - (100.0 / 3.0 + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_relevance_bounds() {
        let engine = engine();
        let docs = vec![
            Document::new("Dokumen Perumahan")
                .with_keywords(&["perumahan", "rumah", "housing", "dokumen", "berkas"]),
            Document::new("Tidak relevan"),
            Document::default(),
        ];
        for query in ["dokumen perumahan", "pajak", "", "xyz"] {
            for doc in &docs {
                let score = engine.calculate_relevance_score(query, doc);
                assert!((0.0..=100.0).contains(&score), "{} scored {}", query, score);
            }
        }
    }

    #[test]
    fn test_relevance_monotonic_in_matches() {
        let engine = SynonymEngine::new(vec![]);
        let one = Document::new("x").with_description("alpha");
        let two = Document::new("x").with_description("alpha beta");
        assert!(
            engine.calculate_relevance_score("alpha beta", &two)
                > engine.calculate_relevance_score("alpha beta", &one)
        );
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let doc = Document::new("Dokumen");
        assert_eq!(engine().calculate_relevance_score("", &doc), 0.0);
    }

    #[test]
    fn test_score_document_matches_separate_calls() {
        let engine = engine();
        let doc = Document::new("Surat Keterangan Domisili").with_keywords(&["alamat"]);
        let combined = engine.score_document("domisili", &doc);
        assert_eq!(
            combined.relevance_score,
            engine.calculate_relevance_score("domisili", &doc)
        );
        assert_eq!(
            combined.matched_terms,
            engine.find_matching_synonyms("domisili", &doc)
        );
    }
}
