//! Scan Subjects
//!
//! Core input types cho URL và email checks.
//! A subject is validated once at construction and immutable afterwards.

use thiserror::Error;
use url::Url;

// ============================================================================
// ERRORS
// ============================================================================

/// Why an input could not become a scan subject
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectError {
    #[error("not a valid URL: {0}")]
    InvalidUrl(String),

    #[error("unsupported scheme '{0}' - only http and https are scanned")]
    UnsupportedScheme(String),

    #[error("email sender, subject and body are all required")]
    EmptyEmailField,
}

// ============================================================================
// URL SUBJECT
// ============================================================================

/// A URL accepted for scanning
///
/// Only absolute http/https URLs qualify. Browser-internal schemes
/// (chrome://, about:, extension pages) are rejected at parse time,
/// which is what keeps them out of the watch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSubject {
    value: String,
    host: String,
}

impl UrlSubject {
    /// Validate a raw string as a scannable web URL
    ///
    /// The original input string is kept verbatim for the wire request
    /// and for history records; the parse is only a gate.
    pub fn parse(input: &str) -> Result<Self, SubjectError> {
        let parsed = Url::parse(input)
            .map_err(|e| SubjectError::InvalidUrl(e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(SubjectError::UnsupportedScheme(other.to_string())),
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| SubjectError::InvalidUrl("missing host".to_string()))?
            .to_string();

        Ok(Self {
            value: input.to_string(),
            host,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Hostname, used in alert messages
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl std::fmt::Display for UrlSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// ============================================================================
// EMAIL SUBJECT
// ============================================================================

/// An email accepted for scanning
///
/// Sender, subject and body must all be non-empty before a check is
/// submitted. The classifier receives the three parts joined by single
/// spaces, in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSubject {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

impl EmailSubject {
    pub fn new(sender: &str, subject: &str, body: &str) -> Result<Self, SubjectError> {
        let sender = sender.trim();
        let subject = subject.trim();
        let body = body.trim();

        if sender.is_empty() || subject.is_empty() || body.is_empty() {
            return Err(SubjectError::EmptyEmailField);
        }

        Ok(Self {
            sender: sender.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        })
    }

    /// The single-string form sent to the classifier
    pub fn blob(&self) -> String {
        format!("{} {} {}", self.sender, self.subject, self.body)
    }
}

// ============================================================================
// SUBJECT (tagged union)
// ============================================================================

/// Something the agent can score: a URL or an email
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Url(UrlSubject),
    Email(EmailSubject),
}

impl Subject {
    /// Short form for log lines
    pub fn describe(&self) -> String {
        match self {
            Subject::Url(u) => u.as_str().to_string(),
            Subject::Email(e) => format!("{} - {}", e.sender, e.subject),
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
    fn test_accepts_http_and_https() {
        let http = UrlSubject::parse("http://example.com/login").unwrap();
        assert_eq!(http.as_str(), "http://example.com/login");
        assert_eq!(http.host(), "example.com");

        let https = UrlSubject::parse("https://example.tk").unwrap();
        assert_eq!(https.host(), "example.tk");
    }

    #[test]
    fn test_rejects_browser_internal_schemes() {
        assert_eq!(
            UrlSubject::parse("chrome://extensions"),
            Err(SubjectError::UnsupportedScheme("chrome".to_string()))
        );
        assert_eq!(
            UrlSubject::parse("about:blank"),
            Err(SubjectError::UnsupportedScheme("about".to_string()))
        );
        assert!(matches!(
            UrlSubject::parse("ftp://files.example.com"),
            Err(SubjectError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_rejects_garbage_input() {
        assert!(matches!(
            UrlSubject::parse("not a url at all"),
            Err(SubjectError::InvalidUrl(_))
        ));
        assert!(matches!(
            UrlSubject::parse(""),
            Err(SubjectError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_keeps_original_string_verbatim() {
        // No normalization: what the user typed is what gets scored
        let s = UrlSubject::parse("https://example.com/a?b=c#frag").unwrap();
        assert_eq!(s.as_str(), "https://example.com/a?b=c#frag");
    }

    #[test]
    fn test_email_requires_all_fields() {
        assert_eq!(
            EmailSubject::new("boss@corp.com", "Hello", ""),
            Err(SubjectError::EmptyEmailField)
        );
        assert_eq!(
            EmailSubject::new("", "Hello", "body"),
            Err(SubjectError::EmptyEmailField)
        );
        assert_eq!(
            EmailSubject::new("boss@corp.com", "   ", "body"),
            Err(SubjectError::EmptyEmailField)
        );
    }

    #[test]
    fn test_email_blob_joins_with_single_spaces() {
        let email = EmailSubject::new("boss@corp.com", "Invoice due", "Pay now").unwrap();
        assert_eq!(email.blob(), "boss@corp.com Invoice due Pay now");
    }

    #[test]
    fn test_subject_describes_for_logs() {
        let url = Subject::Url(UrlSubject::parse("https://example.com").unwrap());
        let email = Subject::Email(EmailSubject::new("a@b.c", "Invoice", "body").unwrap());
        assert_eq!(url.describe(), "https://example.com");
        assert_eq!(email.describe(), "a@b.c - Invoice");
    }
}
