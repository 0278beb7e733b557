//! Danger Alerts
//!
//! Raised when watch mode sees a score below the alert threshold.
//! Always logged; additionally POSTed as JSON to a webhook when
//! FRAUDSHIELD_ALERT_WEBHOOK is configured. Delivery failures are
//! logged and swallowed - an alert must never break the scan pass.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::history::HistoryKind;
use super::scoring::RiskBand;
use super::subject::UrlSubject;
use crate::constants;

// ============================================================================
// ALERT PAYLOAD
// ============================================================================

/// Alert payload, logged and sent to the webhook as-is
#[derive(Debug, Clone, Serialize)]
pub struct DangerAlert {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: RiskBand,
    pub kind: HistoryKind,
    pub content: String,
    pub score: u8,
    pub timestamp: DateTime<Utc>,
}

impl DangerAlert {
    /// Alert for a dangerous site seen in watch mode
    pub fn for_url(subject: &UrlSubject, score: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: "Dangerous Website Detected".to_string(),
            message: format!(
                "The site {} may be unsafe. Safety score: {}/100",
                subject.host(),
                score
            ),
            severity: RiskBand::from_score(score),
            kind: HistoryKind::Url,
            content: subject.as_str().to_string(),
            score,
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// DELIVERY
// ============================================================================

/// Raise an alert
pub async fn raise(alert: &DangerAlert) {
    log::warn!("[DANGER] {}", alert.message);

    if let Some(webhook_url) = constants::get_alert_webhook() {
        // ureq blocks, so delivery runs on the blocking pool instead
        // of tying up an async worker
        let payload = alert.clone();
        let delivery =
            tokio::task::spawn_blocking(move || send_webhook(&webhook_url, &payload)).await;
        if let Err(e) = delivery {
            log::error!("Alert delivery task failed: {}", e);
        }
    }
}

fn send_webhook(webhook_url: &str, alert: &DangerAlert) {
    let body = match serde_json::to_string(alert) {
        Ok(body) => body,
        Err(e) => {
            log::error!("Failed to serialize alert: {}", e);
            return;
        }
    };

    let response = ureq::post(webhook_url)
        .set("Content-Type", "application/json")
        .send_string(&body);

    match response {
        Ok(resp) => log::info!("Alert {} delivered to webhook ({})", alert.id, resp.status()),
        Err(e) => log::error!("Failed to deliver alert webhook: {}", e),
    }
}

// ============================================================================
// TESTS
// ============================================================================
