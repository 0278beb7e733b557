//! Scoring Rules & Thresholds
//!
//! Định nghĩa các tier và threshold cho risk scoring.
//! KHÔNG chứa logic - chỉ constants.
//!
//! The tier values are a compatibility contract: persisted history
//! records carry them, so changing one here changes what old and new
//! records mean relative to each other.

// ============================================================================
// URL SCORE TIERS
// ============================================================================

/// Score for a URL the classifier calls Legitimate
pub const URL_SCORE_LEGITIMATE: u8 = 90;

/// Score for a URL the classifier calls Phishing
pub const URL_SCORE_PHISHING: u8 = 30;

/// Score for any other label the classifier returns
pub const URL_SCORE_UNCERTAIN: u8 = 60;

/// Score reported when URL classification fails entirely
pub const URL_SCORE_FALLBACK: u8 = 50;

// ============================================================================
// EMAIL SCORE TIERS
// ============================================================================

/// Score for an email the classifier calls Legitimate
pub const EMAIL_SCORE_LEGITIMATE: u8 = 85;

/// Score for any email the classifier does not call Legitimate
pub const EMAIL_SCORE_FLAGGED: u8 = 40;

// ============================================================================
// TRIGGER THRESHOLDS (watch mode)
// ============================================================================

/// Watch mode persists a visit only below this score
pub const PERSIST_BELOW: u8 = 70;

/// Watch mode raises an alert only below this score
pub const ALERT_BELOW: u8 = 40;

// ============================================================================
// RISK BANDS
// ============================================================================

/// At or above this score = Safe band
pub const SAFE_BAND_MIN: u8 = 80;

/// At or above this score = Suspicious band, below = Dangerous
pub const SUSPICIOUS_BAND_MIN: u8 = 50;

// ============================================================================
// FEATURE FLAG KEYS (classifier wire names)
// ============================================================================

pub const FEATURE_NO_HTTPS: &str = "NoHttps";
pub const FEATURE_RANDOM_STRING: &str = "RandomString";

// ============================================================================
// EMAIL HEURISTIC FRAGMENTS
// ============================================================================

/// Sender domains treated as unverified (matched on the lowercased sender)
pub const SUSPICIOUS_SENDER_DOMAIN: &str = "@suspicious.com";

/// Words that count as urgency tactics (matched on the lowercased body)
pub const URGENCY_KEYWORDS: &[&str] = &["urgent", "now"];

/// Substring that marks an extracted link as a shortener
pub const LINK_SHORTENER_MARKER: &str = "bit.ly";

// ============================================================================
// FINDING LABELS
// ============================================================================

pub const PATTERN_RANDOM_STRING: &str = "Random string detected";
pub const INDICATOR_SUSPICIOUS_LANGUAGE: &str = "Suspicious language";

// ============================================================================
// ADVICE TEXT
// ============================================================================

pub const ADVICE_URL_DANGEROUS: &str = "This URL may be dangerous. Do not proceed.";
pub const ADVICE_URL_SAFE: &str = "This URL appears to be safe.";
pub const ADVICE_URL_FAILED: &str = "Analysis failed. Please try again.";
pub const ADVICE_EMAIL_SUSPICIOUS: &str =
    "This email seems suspicious. Avoid clicking links or downloading attachments.";
pub const ADVICE_EMAIL_CLEAR: &str = "No major threats detected in this email.";
