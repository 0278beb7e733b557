//! History Records
//!
//! Immutable, timestamped records of completed checks.
//! Field names are a storage contract: existing history files use
//! `type`/`content`/`result`/`timestamp` and must keep loading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// KIND & FILTER
// ============================================================================

/// What kind of subject a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Url,
    Email,
}

impl HistoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryKind::Url => "url",
            HistoryKind::Email => "email",
        }
    }
}

impl std::fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// History view filter; `All` is the no-filter sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFilter {
    All,
    Url,
    Email,
}

impl HistoryFilter {
    pub fn matches(&self, record: &HistoryRecord) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Url => record.kind == HistoryKind::Url,
            HistoryFilter::Email => record.kind == HistoryKind::Email,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryFilter::All => "all",
            HistoryFilter::Url => "url",
            HistoryFilter::Email => "email",
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One completed check
///
/// Records are append-only: created when a check finishes (including
/// the degraded URL fallback), removed only by clearing the whole
/// ledger. Identity is positional, so there is no id field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "type")]
    pub kind: HistoryKind,
    pub content: String,
    pub result: u8,
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Record for a URL check; content is the URL itself
    pub fn url(url: &str, score: u8) -> Self {
        Self {
            kind: HistoryKind::Url,
            content: url.to_string(),
            result: score,
            timestamp: Utc::now(),
        }
    }

    /// Record for an email check; content is "sender - subject"
    pub fn email(sender: &str, subject: &str, score: u8) -> Self {
        Self {
            kind: HistoryKind::Email,
            content: format!("{} - {}", sender, subject),
            result: score,
            timestamp: Utc::now(),
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
    fn test_serialized_field_names() {
        let record = HistoryRecord::url("https://example.com", 90);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["type"], "url");
        assert_eq!(value["content"], "https://example.com");
        assert_eq!(value["result"], 90);
        // ISO-8601 timestamp string
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_email_content_format() {
        let record = HistoryRecord::email("boss@corp.com", "Q3 numbers", 85);
        assert_eq!(record.kind, HistoryKind::Email);
        assert_eq!(record.content, "boss@corp.com - Q3 numbers");
    }

    #[test]
    fn test_loads_stored_shape() {
        // The shape older history files were written in
        let record: HistoryRecord = serde_json::from_str(
            r#"{"type": "email", "content": "a@b.c - hi", "result": 40,
                "timestamp": "2024-01-15T10:30:00.000Z"}"#,
        )
        .unwrap();

        assert_eq!(record.kind, HistoryKind::Email);
        assert_eq!(record.result, 40);
    }

    #[test]
    fn test_filter_matches() {
        let url = HistoryRecord::url("https://example.com", 90);
        let email = HistoryRecord::email("a@b.c", "s", 40);

        assert!(HistoryFilter::All.matches(&url));
        assert!(HistoryFilter::All.matches(&email));
        assert!(HistoryFilter::Url.matches(&url));
        assert!(!HistoryFilter::Url.matches(&email));
        assert!(HistoryFilter::Email.matches(&email));
        assert!(!HistoryFilter::Email.matches(&url));
    }
}
