//! Risk Scorer
//!
//! CHỈ chứa logic scoring - không có types, không có I/O.
//! Input: Verdict (plus the email fields for email checks).
//! Output: Report.
//!
//! Every function here is pure and total: any label value, including
//! ones the service invents later, produces a report.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::{
    ADVICE_EMAIL_CLEAR, ADVICE_EMAIL_SUSPICIOUS, ADVICE_URL_DANGEROUS, ADVICE_URL_FAILED,
    ADVICE_URL_SAFE, EMAIL_SCORE_FLAGGED, EMAIL_SCORE_LEGITIMATE, FEATURE_NO_HTTPS,
    FEATURE_RANDOM_STRING, INDICATOR_SUSPICIOUS_LANGUAGE, LINK_SHORTENER_MARKER,
    PATTERN_RANDOM_STRING, SUSPICIOUS_SENDER_DOMAIN, URGENCY_KEYWORDS, URL_SCORE_FALLBACK,
    URL_SCORE_LEGITIMATE, URL_SCORE_PHISHING, URL_SCORE_UNCERTAIN,
};
use super::types::{EmailFindings, Findings, Report, UrlFindings};
use crate::logic::classifier::{Verdict, VerdictLabel};
use crate::logic::subject::EmailSubject;

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());

// ============================================================================
// URL SCORING
// ============================================================================

/// Score a URL verdict
pub fn score_url(verdict: &Verdict) -> Report {
    let safety_score = match verdict.label {
        VerdictLabel::Legitimate => URL_SCORE_LEGITIMATE,
        VerdictLabel::Phishing => URL_SCORE_PHISHING,
        VerdictLabel::Other(_) => URL_SCORE_UNCERTAIN,
    };

    let suspicious_patterns = if verdict.feature(FEATURE_RANDOM_STRING) {
        vec![PATTERN_RANDOM_STRING.to_string()]
    } else {
        vec![]
    };

    let advice = if verdict.label.is_phishing() {
        ADVICE_URL_DANGEROUS
    } else {
        ADVICE_URL_SAFE
    };

    Report {
        safety_score,
        advice,
        findings: Findings::Url(UrlFindings {
            ssl_valid: !verdict.feature(FEATURE_NO_HTTPS),
            domain_age: "Unknown".to_string(),
            blacklisted: false,
            suspicious_patterns,
        }),
    }
}

/// Report returned when URL classification fails
///
/// Deliberately bland: no claim about SSL or patterns, midline score,
/// retry advice. Watch mode still persists it (50 < 70) but never
/// alerts on it (50 >= 40).
pub fn url_fallback() -> Report {
    Report {
        safety_score: URL_SCORE_FALLBACK,
        advice: ADVICE_URL_FAILED,
        findings: Findings::Url(UrlFindings {
            ssl_valid: false,
            domain_age: "Unknown".to_string(),
            blacklisted: false,
            suspicious_patterns: vec![],
        }),
    }
}

// ============================================================================
// EMAIL SCORING
// ============================================================================

/// Score an email verdict together with its local heuristics
///
/// The sender/urgency/link findings come from the email itself, not
/// from the classifier; only the score tier and the indicator list key
/// off the label.
pub fn score_email(email: &EmailSubject, verdict: &Verdict) -> Report {
    let safety_score = if verdict.label.is_legitimate() {
        EMAIL_SCORE_LEGITIMATE
    } else {
        EMAIL_SCORE_FLAGGED
    };

    let phishing_indicators = if verdict.label.is_legitimate() {
        vec![]
    } else {
        vec![INDICATOR_SUSPICIOUS_LANGUAGE.to_string()]
    };

    let advice = if verdict.label.is_phishing() {
        ADVICE_EMAIL_SUSPICIOUS
    } else {
        ADVICE_EMAIL_CLEAR
    };

    Report {
        safety_score,
        advice,
        findings: Findings::Email(EmailFindings {
            sender_verified: sender_verified(&email.sender),
            phishing_indicators,
            urgency_tactics: urgency_tactics(&email.body),
            suspicious_links: suspicious_links(&email.body),
        }),
    }
}

fn sender_verified(sender: &str) -> bool {
    !sender.to_lowercase().contains(SUSPICIOUS_SENDER_DOMAIN)
}

fn urgency_tactics(body: &str) -> bool {
    let body = body.to_lowercase();
    URGENCY_KEYWORDS.iter().any(|word| body.contains(word))
}

/// Extract links from the body and keep only shortener links
fn suspicious_links(body: &str) -> Vec<String> {
    LINK_PATTERN
        .find_iter(body)
        .map(|m| m.as_str().to_string())
        .filter(|link| link.contains(LINK_SHORTENER_MARKER))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
