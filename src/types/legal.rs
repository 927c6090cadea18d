//! Legal rule and compliance verdict types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Provision of Indonesian law used to score document text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalRule {
    pub id: String,
    pub law: String,
    pub article: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub is_restriction: bool,
    pub public_access_allowed: bool,
}

impl LegalRule {
    /// Short citation: `<law> - <article>`
    pub fn citation(&self) -> String {
        format!("{} - {}", self.law, self.article)
    }

    /// Full citation: `<law> - <article>: <description>`
    pub fn full_citation(&self) -> String {
        format!("{} - {}: {}", self.law, self.article, self.description)
    }
}

/// Accessibility verdict for a single document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub is_public: bool,
    pub legal_basis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction_reason: Option<String>,
    pub confidence: f64,
    pub matched_rules: Vec<LegalRule>,
}

/// Public/restricted label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Public,
    Restricted,
}

impl Classification {
    pub fn from_public(is_public: bool) -> Self {
        if is_public {
            Self::Public
        } else {
            Self::Restricted
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Restricted => f.write_str("restricted"),
        }
    }
}

/// Outcome of checking a proposed label against the computed verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub recommendation: Classification,
    pub legal_justification: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_wire_format() {
        assert_eq!(serde_json::to_string(&Classification::Public).unwrap(), "\"public\"");
        let parsed: Classification = serde_json::from_str("\"restricted\"").unwrap();
        assert_eq!(parsed, Classification::Restricted);
        assert_eq!(Classification::from_public(false), Classification::Restricted);
    }

    #[test]
    fn test_compliance_result_omits_missing_reason() {
        let result = ComplianceResult {
            is_public: true,
            legal_basis: "basis".to_string(),
            restriction_reason: None,
            confidence: 0.0,
            matched_rules: vec![],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isPublic"], true);
        assert!(value.get("restrictionReason").is_none());
        assert!(value["matchedRules"].as_array().unwrap().is_empty());
    }
}
