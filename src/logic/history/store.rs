//! History Storage
//!
//! Key-addressed persistence for history records. The production store
//! keeps one pretty-printed JSON array per key under the data dir;
//! tests swap in a temp dir through the same trait.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::record::HistoryRecord;

// ============================================================================
// ERRORS
// ============================================================================

/// Why the backing store could not be read or written
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("history io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history data corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

// ============================================================================
// STORE TRAIT
// ============================================================================

/// Storage backend for the history ledger
///
/// `load` of a key that was never written returns an empty list, the
/// same as a cleared one; callers cannot tell the difference.
pub trait HistoryStore: Send {
    fn load(&self, key: &str) -> Result<Vec<HistoryRecord>, StoreError>;
    fn save(&self, key: &str, records: &[HistoryRecord]) -> Result<(), StoreError>;
}

// ============================================================================
// JSON FILE STORE
// ============================================================================

/// File-backed store: `{dir}/{key}.json`
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Vec<HistoryRecord>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn save(&self, key: &str, records: &[HistoryRecord]) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&path, json)?;
        Ok(())
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
    fn test_load_missing_key_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf()).unwrap();

        assert!(store.load("phishing_history").unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf()).unwrap();

        let records = vec![
            HistoryRecord::url("https://example.com", 90),
            HistoryRecord::email("a@b.c", "hello", 40),
        ];
        store.save("phishing_history", &records).unwrap();

        let loaded = store.load("phishing_history").unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("deeper").join("still");

        let store = JsonFileStore::new(nested.clone()).unwrap();
        store.save("k", &[HistoryRecord::url("https://x.com", 50)]).unwrap();

        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf()).unwrap();

        std::fs::write(temp_dir.path().join("bad.json"), "not json at all").unwrap();

        assert!(matches!(store.load("bad"), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_keys_map_to_separate_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.save("one", &[HistoryRecord::url("https://a.com", 90)]).unwrap();
        store.save("two", &[HistoryRecord::url("https://b.com", 30)]).unwrap();

        assert_eq!(store.load("one").unwrap()[0].content, "https://a.com");
        assert_eq!(store.load("two").unwrap()[0].content, "https://b.com");
    }
}
