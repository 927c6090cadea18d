//! Keyword-weighted compliance scoring

use crate::types::{Classification, ComplianceResult, Document, LegalRule, ValidationOutcome};

use super::rules::default_legal_rules;

/// A rule whose confidence exceeds this is listed in `matched_rules`
pub const MATCH_THRESHOLD: f64 = 0.3;

/// A matched restriction rule above this makes the document private.
/// Stricter than `MATCH_THRESHOLD` on purpose: near misses are reported but cannot restrict.
pub const RESTRICTION_THRESHOLD: f64 = 0.5;

/// Added when some, but not all, words of a multi-word keyword occur
pub const PARTIAL_MATCH_BONUS: f64 = 0.3;

/// Added when the rule's category name occurs in the text
pub const CATEGORY_BONUS: f64 = 0.5;

/// Legal basis reported when no rule matched
pub const FALLBACK_LEGAL_BASIS: &str = "Tidak ada aturan khusus yang berlaku";

/// Scores documents against a fixed table of legal rules
#[derive(Debug, Clone)]
pub struct ComplianceChecker {
    rules: Vec<LegalRule>,
}

impl ComplianceChecker {
    pub fn new(rules: Vec<LegalRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[LegalRule] {
        &self.rules
    }

    /// Decide whether a document may be published
    pub fn check_compliance(&self, document: &Document) -> ComplianceResult {
        let text = document_text(document);

        let mut matched_rules = Vec::new();
        let mut highest_confidence = 0.0;
        let mut primary_rule: Option<&LegalRule> = None;
        let mut is_public = true;

        for rule in &self.rules {
            let confidence = calculate_rule_match(&text, rule);
            if confidence <= MATCH_THRESHOLD {
                continue;
            }

            matched_rules.push(rule.clone());

            if confidence > highest_confidence {
                highest_confidence = confidence;
                primary_rule = Some(rule);
            }

            if rule.is_restriction && confidence > RESTRICTION_THRESHOLD {
                is_public = false;
            }
        }

        let (legal_basis, restriction_reason) = match primary_rule {
            None => (FALLBACK_LEGAL_BASIS.to_string(), None),
            Some(rule) if is_public => (rule.full_citation(), None),
            Some(rule) => (rule.citation(), Some(rule.full_citation())),
        };

        ComplianceResult {
            is_public,
            legal_basis,
            restriction_reason,
            confidence: highest_confidence,
            matched_rules,
        }
    }

    /// Compare a proposed label with the computed verdict
    pub fn validate_classification(
        &self,
        document: &Document,
        proposed: Classification,
    ) -> ValidationOutcome {
        let compliance = self.check_compliance(document);
        let legal_justification = compliance
            .restriction_reason
            .clone()
            .unwrap_or_else(|| compliance.legal_basis.clone());

        ValidationOutcome {
            is_valid: proposed.is_public() == compliance.is_public,
            recommendation: Classification::from_public(compliance.is_public),
            legal_justification,
        }
    }

    /// Rules filed under `category`, or with a keyword occurring in it
    pub fn applicable_laws(&self, category: &str) -> Vec<&LegalRule> {
        let category_lower = category.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| {
                rule.category == category
                    || rule
                        .keywords
                        .iter()
                        .any(|keyword| category_lower.contains(&keyword.to_lowercase()))
            })
            .collect()
    }
}

impl Default for ComplianceChecker {
    fn default() -> Self {
        Self::new(default_legal_rules())
    }
}

/// Lowercased concatenation of every text field of the document
pub fn document_text(document: &Document) -> String {
    let mut parts = vec![
        document.title.as_str(),
        document.description.as_str(),
        document.content.as_str(),
        document.category.as_str(),
    ];
    parts.extend(document.keywords.iter().map(|s| s.as_str()));
    parts.extend(document.synonyms.iter().map(|s| s.as_str()));
    parts.join(" ").to_lowercase()
}

/// Confidence in `[0, 1]` that `document_text` falls under `rule`
///
/// `document_text` must already be lowercased.
pub fn calculate_rule_match(document_text: &str, rule: &LegalRule) -> f64 {
    if rule.keywords.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;
    for keyword in &rule.keywords {
        let keyword = keyword.to_lowercase();
        if document_text.contains(&keyword) {
            score += 1.0;
        }

        let words: Vec<&str> = keyword.split_whitespace().collect();
        let present = words.iter().filter(|w| document_text.contains(**w)).count();
        if present > 0 && present < words.len() {
            score += PARTIAL_MATCH_BONUS;
        }
    }

    if document_text.contains(&rule.category.replace('_', " ")) {
        score += CATEGORY_BONUS;
    }

    (score / rule.keywords.len() as f64).min(1.0)
}
