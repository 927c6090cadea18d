//! Legal-compliance scoring
//!
//! Scores document text against Indonesian information-disclosure law and
//! produces a public/restricted verdict with a citation.

mod checker;
mod rules;

pub use checker::{
    calculate_rule_match, document_text, ComplianceChecker, CATEGORY_BONUS, FALLBACK_LEGAL_BASIS,
    MATCH_THRESHOLD, PARTIAL_MATCH_BONUS, RESTRICTION_THRESHOLD,
};
pub use rules::default_legal_rules;
