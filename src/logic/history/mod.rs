//! History Module
//!
//! Persisted record of every completed check.
//!
//! ## Structure
//! - `record`: HistoryRecord, HistoryKind, HistoryFilter
//! - `store`: HistoryStore trait + JSON file implementation
//! - `ledger`: HistoryLedger and the global access point

pub mod ledger;
pub mod record;
pub mod store;

pub use ledger::{all, append, clear, filter, init};
pub use record::{HistoryFilter, HistoryKind, HistoryRecord};
