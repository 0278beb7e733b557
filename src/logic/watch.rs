//! Watch Loop
//!
//! Passive scanning of a navigation stream: one visited URL per stdin
//! line. Lines that are not absolute http/https URLs are skipped
//! quietly, matching how browser-internal pages never reach analysis.
//!
//! Each accepted visit is scanned in its own task, so a slow
//! classifier call does not hold up the next navigation. In-flight
//! checks are never cancelled: not when the user moves on, and not
//! when the stream ends - the loop waits for them before returning.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use super::alerts::{self, DangerAlert};
use super::analyze;
use super::classifier::ClassifierClient;
use super::history;
use super::scoring::{ALERT_BELOW, PERSIST_BELOW};
use super::subject::{Subject, UrlSubject};

// ============================================================================
// VISIT GATES
// ============================================================================

/// What a finished watch-mode scan does with its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchAction {
    /// Score is fine, nothing to keep
    Pass,
    /// Risky enough to persist
    Record,
    /// Dangerous: persist and alert
    Alert,
}

pub fn action_for(score: u8) -> WatchAction {
    if score < ALERT_BELOW {
        WatchAction::Alert
    } else if score < PERSIST_BELOW {
        WatchAction::Record
    } else {
        WatchAction::Pass
    }
}

// ============================================================================
// LOOP
// ============================================================================

/// Run the watch loop until stdin closes
pub async fn run(client: ClassifierClient) -> std::io::Result<()> {
    log::info!("🔍 Watch mode: scanning visited URLs from stdin");
    log::info!("   Classifier: {}", client.base_url());
    log::info!("   Persist below: {} / Alert below: {}", PERSIST_BELOW, ALERT_BELOW);

    scan_stream(client, BufReader::new(tokio::io::stdin())).await
}

/// Scan every URL in the stream; returns only after the stream has
/// ended and every spawned scan has finished
async fn scan_stream<R>(client: ClassifierClient, reader: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut scans: Vec<JoinHandle<()>> = Vec::new();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        let subject = match UrlSubject::parse(&line) {
            Ok(subject) => subject,
            Err(e) => {
                log::debug!("Skipping visit ({}): {}", e, line);
                continue;
            }
        };

        // One task per visit; rapid navigations overlap
        let client = client.clone();
        scans.push(tokio::spawn(async move {
            scan_visit(&client, subject).await;
        }));

        // Finished handles are pruned as we go, so the list stays
        // bounded on a long-running stream
        scans.retain(|scan| !scan.is_finished());
    }

    // Stream is done; scans still in flight get to record and alert
    if !scans.is_empty() {
        log::debug!("Stream ended with {} scan(s) in flight", scans.len());
    }
    for scan in scans {
        let _ = scan.await;
    }

    log::info!("Watch mode stopped (stream closed)");
    Ok(())
}

async fn scan_visit(client: &ClassifierClient, url: UrlSubject) {
    let subject = Subject::Url(url.clone());

    // URL analysis degrades instead of failing, so Err is unexpected
    let report = match analyze::analyze(client, &subject).await {
        Ok(report) => report,
        Err(e) => {
            log::error!("URL analysis failed unexpectedly for {}: {}", url, e);
            return;
        }
    };

    match action_for(report.safety_score) {
        WatchAction::Pass => {
            log::debug!("{} scored {} ({})", url, report.safety_score, report.band());
        }
        WatchAction::Record => {
            log::info!(
                "{} scored {} ({}), recording",
                url,
                report.safety_score,
                report.band()
            );
            history::append(analyze::outcome_record(&subject, &report));
        }
        WatchAction::Alert => {
            history::append(analyze::outcome_record(&subject, &report));
            alerts::raise(&DangerAlert::for_url(&url, report.safety_score)).await;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_safe_scores_pass() {
        assert_eq!(action_for(100), WatchAction::Pass);
        assert_eq!(action_for(90), WatchAction::Pass);
        assert_eq!(action_for(70), WatchAction::Pass);
    }

    #[test]
    fn test_risky_scores_record() {
        assert_eq!(action_for(69), WatchAction::Record);
        assert_eq!(action_for(60), WatchAction::Record);
        // The URL fallback score persists but never alerts
        assert_eq!(action_for(50), WatchAction::Record);
        assert_eq!(action_for(40), WatchAction::Record);
    }

    #[test]
    fn test_dangerous_scores_alert() {
        assert_eq!(action_for(39), WatchAction::Alert);
        assert_eq!(action_for(30), WatchAction::Alert);
        assert_eq!(action_for(0), WatchAction::Alert);
    }

    #[tokio::test]
    async fn test_stream_end_waits_for_in_flight_scans() {
        // Unreachable classifier: every accepted visit degrades to the
        // score-50 fallback, which watch mode records
        let temp_dir = TempDir::new().unwrap();
        history::init(Some(temp_dir.path().to_path_buf())).unwrap();

        let client = ClassifierClient::new("http://127.0.0.1:9");
        let input = b"https://one.example.com\nnot a url\nhttps://two.example.com\n";
        scan_stream(client, BufReader::new(&input[..])).await.unwrap();

        // Both scans persisted before scan_stream returned
        let records = history::all();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.result == 50));

        let mut contents: Vec<&str> = records.iter().map(|r| r.content.as_str()).collect();
        contents.sort();
        assert_eq!(contents, ["https://one.example.com", "https://two.example.com"]);
    }
}
