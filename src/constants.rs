//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default classifier endpoint, only edit this file.

use std::path::PathBuf;

/// Default classifier service URL
///
/// This is the fallback URL when no environment variable is set.
/// The service exposes POST /predict/url and POST /predict/email.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default storage key for the history ledger
///
/// The ledger persists to `{data_dir}/{key}.json`.
pub const DEFAULT_HISTORY_KEY: &str = "phishing_history";

/// Directory name under the platform data dir
pub const DATA_DIR_NAME: &str = "fraudshield";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "FraudShield";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get classifier service URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("FRAUDSHIELD_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get history storage key from environment or use default
pub fn get_history_key() -> String {
    std::env::var("FRAUDSHIELD_HISTORY_KEY")
        .unwrap_or_else(|_| DEFAULT_HISTORY_KEY.to_string())
}

/// Get the data directory for persisted state
///
/// Defaults to the platform-local data dir; falls back to the working
/// directory when no platform dir is available.
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FRAUDSHIELD_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Get the history retention cap, if one is configured
///
/// Unset means unbounded history, which matches the original ledger
/// behavior. When set, the oldest records are dropped first.
pub fn get_history_max() -> Option<usize> {
    std::env::var("FRAUDSHIELD_HISTORY_MAX")
        .ok()
        .and_then(|s| s.parse().ok())
}

/// Get the webhook URL for danger alerts, if one is configured
pub fn get_alert_webhook() -> Option<String> {
    std::env::var("FRAUDSHIELD_ALERT_WEBHOOK")
        .ok()
        .filter(|s| !s.trim().is_empty())
}
