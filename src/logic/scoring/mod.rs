//! Scoring Module
//!
//! Turns classifier verdicts into safety reports.
//! Đây là CORE STEP - nơi quyết định Safe/Suspicious/Dangerous.
//!
//! ## Structure
//! - `types`: Report, findings, RiskBand
//! - `rules`: Tier values, thresholds, heuristic fragments
//! - `scorer`: Pure scoring functions

pub mod rules;
pub mod scorer;
pub mod types;

// Re-export main types for convenience
pub use scorer::{score_email, score_url, url_fallback};
pub use types::{Findings, Report, RiskBand};

pub use rules::{ALERT_BELOW, PERSIST_BELOW};
