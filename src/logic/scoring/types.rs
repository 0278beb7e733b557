//! Scoring Types
//!
//! Core types cho risk reports.
//! KHÔNG chứa logic - chỉ data structures.

use serde::Serialize;

use super::rules::{SAFE_BAND_MIN, SUSPICIOUS_BAND_MIN};

// ============================================================================
// RISK BAND
// ============================================================================

/// Coarse risk band derived from a safety score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskBand {
    /// Score 80-100, no action needed
    Safe,
    /// Score 50-79, worth a second look
    Suspicious,
    /// Score below 50, treat as hostile
    Dangerous,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        if score >= SAFE_BAND_MIN {
            RiskBand::Safe
        } else if score >= SUSPICIOUS_BAND_MIN {
            RiskBand::Suspicious
        } else {
            RiskBand::Dangerous
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Safe => "safe",
            RiskBand::Suspicious => "suspicious",
            RiskBand::Dangerous => "dangerous",
        }
    }

    /// Display label, matching the badge text users already know
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Safe => "Safe",
            RiskBand::Suspicious => "Suspicious",
            RiskBand::Dangerous => "Dangerous",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// FINDINGS
// ============================================================================

/// URL-specific findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlFindings {
    pub ssl_valid: bool,
    pub domain_age: String,
    pub blacklisted: bool,
    pub suspicious_patterns: Vec<String>,
}

/// Email-specific findings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailFindings {
    pub sender_verified: bool,
    pub phishing_indicators: Vec<String>,
    pub urgency_tactics: bool,
    pub suspicious_links: Vec<String>,
}

/// Findings for either subject kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Findings {
    Url(UrlFindings),
    Email(EmailFindings),
}

// ============================================================================
// REPORT
// ============================================================================

/// Result of a scoring pass
///
/// `safety_score` is always one of the fixed tier values from `rules`;
/// the scorer never interpolates between tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub safety_score: u8,
    pub advice: &'static str,
    #[serde(flatten)]
    pub findings: Findings,
}

impl Report {
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.safety_score)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_cutoffs() {
        assert_eq!(RiskBand::from_score(100), RiskBand::Safe);
        assert_eq!(RiskBand::from_score(90), RiskBand::Safe);
        assert_eq!(RiskBand::from_score(80), RiskBand::Safe);
        assert_eq!(RiskBand::from_score(79), RiskBand::Suspicious);
        assert_eq!(RiskBand::from_score(60), RiskBand::Suspicious);
        assert_eq!(RiskBand::from_score(50), RiskBand::Suspicious);
        assert_eq!(RiskBand::from_score(49), RiskBand::Dangerous);
        assert_eq!(RiskBand::from_score(30), RiskBand::Dangerous);
        assert_eq!(RiskBand::from_score(0), RiskBand::Dangerous);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(RiskBand::Safe.label(), "Safe");
        assert_eq!(RiskBand::Suspicious.label(), "Suspicious");
        assert_eq!(RiskBand::Dangerous.label(), "Dangerous");
    }

    #[test]
    fn test_report_json_is_flat() {
        // Findings flatten into the report object, no nesting layer
        let report = Report {
            safety_score: 90,
            advice: "ok",
            findings: Findings::Url(UrlFindings {
                ssl_valid: true,
                domain_age: "Unknown".to_string(),
                blacklisted: false,
                suspicious_patterns: vec![],
            }),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["safety_score"], 90);
        assert_eq!(value["ssl_valid"], true);
        assert!(value.get("findings").is_none());
    }
}
