//! Classifier Types
//!
//! Core types cho classifier verdicts.
//! KHÔNG chứa logic - chỉ data structures và wire decoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// VERDICT LABEL
// ============================================================================

/// Label returned by the classification service
///
/// The service is free to return labels beyond the two known ones;
/// those are preserved verbatim in `Other` so they can be logged,
/// while scoring treats them as the uncertain middle tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictLabel {
    Legitimate,
    Phishing,
    Other(String),
}

impl VerdictLabel {
    /// Map a wire label string. Matching is exact, like the service contract.
    pub fn from_str(s: &str) -> Self {
        match s {
            "Legitimate" => VerdictLabel::Legitimate,
            "Phishing" => VerdictLabel::Phishing,
            other => VerdictLabel::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VerdictLabel::Legitimate => "Legitimate",
            VerdictLabel::Phishing => "Phishing",
            VerdictLabel::Other(s) => s,
        }
    }

    pub fn is_phishing(&self) -> bool {
        matches!(self, VerdictLabel::Phishing)
    }

    pub fn is_legitimate(&self) -> bool {
        matches!(self, VerdictLabel::Legitimate)
    }
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// WIRE FORMAT
// ============================================================================

/// Body for POST /predict/url
#[derive(Debug, Serialize)]
pub struct UrlPredictRequest {
    pub url: String,
}

/// Body for POST /predict/email
#[derive(Debug, Serialize)]
pub struct EmailPredictRequest {
    pub email_text: String,
}

/// A feature flag as it appears on the wire
///
/// The service emits these as JSON booleans or as 0/1 integers
/// depending on its model pipeline; both decode to the same flag.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum FeatureFlag {
    Bool(bool),
    Num(f64),
}

impl FeatureFlag {
    pub fn is_set(&self) -> bool {
        match self {
            FeatureFlag::Bool(b) => *b,
            FeatureFlag::Num(n) => *n != 0.0,
        }
    }
}

/// Raw response from either predict endpoint
///
/// The email endpoint omits `features`; the default keeps decoding
/// uniform for both.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub result: String,
    #[serde(default)]
    pub features: HashMap<String, FeatureFlag>,
}

// ============================================================================
// VERDICT
// ============================================================================

/// Decoded classification verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub label: VerdictLabel,
    pub features: HashMap<String, bool>,
}

impl Verdict {
    /// Look up a feature flag; absent flags read as unset
    pub fn feature(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }
}

impl From<PredictResponse> for Verdict {
    fn from(raw: PredictResponse) -> Self {
        Self {
            label: VerdictLabel::from_str(&raw.result),
            features: raw
                .features
                .into_iter()
                .map(|(name, flag)| (name, flag.is_set()))
                .collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_integer_feature_flags() {
        // The backend emits 0/1 ints for features
        let raw: PredictResponse = serde_json::from_str(
            r#"{"result": "Phishing", "features": {"NoHttps": 1, "RandomString": 0}}"#,
        )
        .unwrap();
        let verdict = Verdict::from(raw);

        assert_eq!(verdict.label, VerdictLabel::Phishing);
        assert!(verdict.feature("NoHttps"));
        assert!(!verdict.feature("RandomString"));
    }

    #[test]
    fn test_decodes_boolean_feature_flags() {
        let raw: PredictResponse = serde_json::from_str(
            r#"{"result": "Legitimate", "features": {"NoHttps": false, "RandomString": true}}"#,
        )
        .unwrap();
        let verdict = Verdict::from(raw);

        assert!(!verdict.feature("NoHttps"));
        assert!(verdict.feature("RandomString"));
    }

    #[test]
    fn test_missing_features_decode_empty() {
        // The email endpoint sends no features member at all
        let raw: PredictResponse = serde_json::from_str(r#"{"result": "Legitimate"}"#).unwrap();
        let verdict = Verdict::from(raw);

        assert!(verdict.features.is_empty());
        assert!(!verdict.feature("NoHttps"));
    }

    #[test]
    fn test_unknown_labels_preserved() {
        let label = VerdictLabel::from_str("Defacement");
        assert_eq!(label, VerdictLabel::Other("Defacement".to_string()));
        assert_eq!(label.as_str(), "Defacement");
        assert!(!label.is_phishing());
        assert!(!label.is_legitimate());
    }

    #[test]
    fn test_label_matching_is_exact() {
        // Lowercase variants are not the known labels
        assert_eq!(
            VerdictLabel::from_str("legitimate"),
            VerdictLabel::Other("legitimate".to_string())
        );
    }
}
