//! Logic Module - Scan Pipeline & Engines
//!
//! Chứa các engines xử lý: Subject validation, Classifier client,
//! Risk scoring, History ledger, Watch loop, Alerts.
//!
//! ## Flow
//! trigger -> `subject` -> `classifier` -> `scoring` -> `history`
//! (plus `alerts` when watch mode sees a dangerous score)

pub mod alerts;
pub mod analyze;
pub mod classifier;
pub mod history;
pub mod scoring;
pub mod subject;
pub mod watch;
