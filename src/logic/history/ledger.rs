//! History Ledger
//!
//! Append-only list of completed checks over an injected store.
//! Every operation hits the store directly - there is no in-memory
//! cache to go stale between CLI invocations.

use std::path::PathBuf;

use parking_lot::Mutex;

use super::record::{HistoryFilter, HistoryRecord};
use super::store::{HistoryStore, JsonFileStore, StoreError};
use crate::constants;

// ============================================================================
// LEDGER STATE
// ============================================================================

/// Global ledger instance
///
/// The mutex also serializes append's read-modify-write within this
/// process. Across processes there is no file lock: two agents
/// appending at once race last-write-wins.
static LEDGER: Mutex<Option<HistoryLedger>> = Mutex::new(None);

// ============================================================================
// LEDGER
// ============================================================================

/// Append-only check history under a single storage key
pub struct HistoryLedger {
    store: Option<Box<dyn HistoryStore>>,
    key: String,
    max_records: Option<usize>,
}

impl HistoryLedger {
    /// Ledger over an injected store
    pub fn new(
        store: Box<dyn HistoryStore>,
        key: impl Into<String>,
        max_records: Option<usize>,
    ) -> Self {
        Self {
            store: Some(store),
            key: key.into(),
            max_records,
        }
    }

    /// Ledger with no backing store
    ///
    /// Used when persistence could not be prepared. All operations
    /// become no-ops, so callers see the same surface either way and
    /// cannot tell an empty history from a missing one.
    pub fn detached() -> Self {
        Self {
            store: None,
            key: constants::DEFAULT_HISTORY_KEY.to_string(),
            max_records: None,
        }
    }

    /// Append one record
    ///
    /// Store failures are logged and swallowed; a check never fails
    /// because its record could not be written.
    pub fn append(&mut self, record: HistoryRecord) {
        let Some(store) = self.store.as_ref() else {
            log::warn!("History store detached, record dropped: {}", record.content);
            return;
        };

        let mut records = match store.load(&self.key) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Could not read history ({}), starting a fresh list", e);
                Vec::new()
            }
        };

        records.push(record);

        if let Some(max) = self.max_records {
            if records.len() > max {
                let excess = records.len() - max;
                records.drain(0..excess);
                log::debug!("History cap {} reached, dropped {} oldest", max, excess);
            }
        }

        if let Err(e) = store.save(&self.key, &records) {
            log::warn!("Failed to persist history: {}", e);
        }
    }

    /// All records, oldest first
    pub fn all(&self) -> Vec<HistoryRecord> {
        let Some(store) = self.store.as_ref() else {
            return Vec::new();
        };

        match store.load(&self.key) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Could not read history: {}", e);
                Vec::new()
            }
        }
    }

    /// Records matching the filter, insertion order preserved
    pub fn filter(&self, filter: HistoryFilter) -> Vec<HistoryRecord> {
        self.all()
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    /// Drop every record. Irreversible.
    pub fn clear(&mut self) {
        let Some(store) = self.store.as_ref() else {
            return;
        };

        if let Err(e) = store.save(&self.key, &[]) {
            log::warn!("Failed to clear history: {}", e);
        } else {
            log::info!("History cleared ({})", self.key);
        }
    }
}

// ============================================================================
// GLOBAL API
// ============================================================================

/// Initialize the global ledger
///
/// On store failure the error is returned for the caller to log, and a
/// detached ledger is installed so later operations stay quiet no-ops.
pub fn init(base_dir: Option<PathBuf>) -> Result<(), StoreError> {
    let dir = base_dir.unwrap_or_else(constants::get_data_dir);

    match JsonFileStore::new(dir) {
        Ok(store) => {
            *LEDGER.lock() = Some(HistoryLedger::new(
                Box::new(store),
                constants::get_history_key(),
                constants::get_history_max(),
            ));
            Ok(())
        }
        Err(e) => {
            *LEDGER.lock() = Some(HistoryLedger::detached());
            Err(e)
        }
    }
}

/// Append a record to the global ledger
pub fn append(record: HistoryRecord) {
    let mut guard = LEDGER.lock();
    match guard.as_mut() {
        Some(ledger) => ledger.append(record),
        None => log::warn!(
            "History ledger not initialized, record dropped: {}",
            record.content
        ),
    }
}

/// All records from the global ledger
pub fn all() -> Vec<HistoryRecord> {
    LEDGER.lock().as_ref().map(|l| l.all()).unwrap_or_default()
}

/// Filtered records from the global ledger
pub fn filter(f: HistoryFilter) -> Vec<HistoryRecord> {
    LEDGER
        .lock()
        .as_ref()
        .map(|l| l.filter(f))
        .unwrap_or_default()
}

/// Clear the global ledger
pub fn clear() {
    if let Some(ledger) = LEDGER.lock().as_mut() {
        ledger.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
