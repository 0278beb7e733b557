//! Analysis Pipeline
//!
//! One sequential pass per check: classify, score, hand the report
//! back to the trigger surface. Persistence stays with the surfaces
//! because they gate it differently (active checks always record,
//! watch mode records only risky visits).

use super::classifier::{ClassifierClient, ClassifyError};
use super::history::HistoryRecord;
use super::scoring::{self, Report};
use super::subject::Subject;

// ============================================================================
// FAILURE POLICY
// ============================================================================

/// What happens when the classifier call fails
///
/// URL checks degrade: the user is mid-navigation and a hard error
/// helps nobody, so they get the bland fallback report. Email checks
/// surface the error: the user pasted content deliberately and a
/// made-up verdict would be worse than none.
#[derive(Debug, Clone, PartialEq)]
pub enum FailurePolicy {
    /// Swap in this report instead of failing
    Degrade(Report),
    /// Propagate the error to the caller
    Surface,
}

impl FailurePolicy {
    pub fn for_subject(subject: &Subject) -> Self {
        match subject {
            Subject::Url(_) => FailurePolicy::Degrade(scoring::url_fallback()),
            Subject::Email(_) => FailurePolicy::Surface,
        }
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Classify and score a subject
///
/// For URL subjects this never returns Err: classifier failures come
/// back as the fallback report under the Degrade policy.
pub async fn analyze(
    client: &ClassifierClient,
    subject: &Subject,
) -> Result<Report, ClassifyError> {
    match classify_and_score(client, subject).await {
        Ok(report) => Ok(report),
        Err(err) => match FailurePolicy::for_subject(subject) {
            FailurePolicy::Degrade(fallback) => {
                log::warn!(
                    "Classifier unavailable for {} ({}), returning degraded report",
                    subject.describe(),
                    err
                );
                Ok(fallback)
            }
            FailurePolicy::Surface => Err(err),
        },
    }
}

async fn classify_and_score(
    client: &ClassifierClient,
    subject: &Subject,
) -> Result<Report, ClassifyError> {
    match subject {
        Subject::Url(url) => {
            let verdict = client.classify_url(url.as_str()).await?;
            log::debug!("Classifier verdict for {}: {}", url, verdict.label);
            Ok(scoring::score_url(&verdict))
        }
        Subject::Email(email) => {
            let verdict = client.classify_email(&email.blob()).await?;
            log::debug!("Classifier verdict for email: {}", verdict.label);
            Ok(scoring::score_email(email, &verdict))
        }
    }
}

/// Build the history record for a finished check
pub fn outcome_record(subject: &Subject, report: &Report) -> HistoryRecord {
    match subject {
        Subject::Url(url) => HistoryRecord::url(url.as_str(), report.safety_score),
        Subject::Email(email) => {
            HistoryRecord::email(&email.sender, &email.subject, report.safety_score)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::history::HistoryKind;
    use crate::logic::scoring::Findings;
    use crate::logic::subject::{EmailSubject, UrlSubject};

    fn url_subject(s: &str) -> Subject {
        Subject::Url(UrlSubject::parse(s).unwrap())
    }

    fn email_subject() -> Subject {
        Subject::Email(EmailSubject::new("boss@corp.com", "Invoice", "Pay today").unwrap())
    }

    #[test]
    fn test_url_failures_degrade() {
        let policy = FailurePolicy::for_subject(&url_subject("https://example.com"));

        let FailurePolicy::Degrade(fallback) = policy else {
            panic!("URL checks must degrade, not surface");
        };
        assert_eq!(fallback.safety_score, 50);
        assert!(matches!(fallback.findings, Findings::Url(_)));
    }

    #[test]
    fn test_email_failures_surface() {
        assert_eq!(
            FailurePolicy::for_subject(&email_subject()),
            FailurePolicy::Surface
        );
    }

    #[tokio::test]
    async fn test_url_analysis_degrades_when_classifier_unreachable() {
        // Nothing listens on this port, so the call fails at connect
        let client = ClassifierClient::new("http://127.0.0.1:9");
        let report = analyze(&client, &url_subject("https://example.com"))
            .await
            .unwrap();

        assert_eq!(report.safety_score, 50);
        assert_eq!(report.advice, "Analysis failed. Please try again.");
    }

    #[tokio::test]
    async fn test_email_analysis_surfaces_classifier_failure() {
        let client = ClassifierClient::new("http://127.0.0.1:9");
        let result = analyze(&client, &email_subject()).await;

        assert!(matches!(result, Err(ClassifyError::Network(_))));
    }

    #[test]
    fn test_outcome_record_for_url() {
        let subject = url_subject("https://example.tk");
        let record = outcome_record(&subject, &scoring::url_fallback());

        assert_eq!(record.kind, HistoryKind::Url);
        assert_eq!(record.content, "https://example.tk");
        assert_eq!(record.result, 50);
    }

    #[test]
    fn test_outcome_record_for_email() {
        let subject = email_subject();
        let report = scoring::score_email(
            match &subject {
                Subject::Email(e) => e,
                _ => unreachable!(),
            },
            &crate::logic::classifier::Verdict {
                label: crate::logic::classifier::VerdictLabel::Phishing,
                features: Default::default(),
            },
        );
        let record = outcome_record(&subject, &report);

        assert_eq!(record.kind, HistoryKind::Email);
        assert_eq!(record.content, "boss@corp.com - Invoice");
        assert_eq!(record.result, 40);
    }
}
