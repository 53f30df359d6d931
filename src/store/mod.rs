//! JSON-file-backed persistence.
//!
//! Each named collection lives in its own `<key>.json` file under the
//! data directory and is rewritten wholesale on every mutation. A file
//! that cannot be parsed is logged and replaced by the caller-supplied
//! fallback; the failure is never surfaced to the user.

pub mod codes;
pub mod resumes;

pub use codes::CodeRepository;
pub use resumes::ResumeRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Load a collection, falling back to `fallback()` when the file is
    /// missing or unparseable. Parse failures are logged, not returned.
    pub fn load_or<T, F>(&self, key: &str, fallback: F) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let path = self.path_for(key);
        if !path.exists() {
            return fallback();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(records) => records,
                Err(e) => {
                    error!("Failed to parse stored collection '{key}': {e}");
                    fallback()
                }
            },
            Err(e) => {
                error!("Failed to read stored collection '{key}': {e}");
                fallback()
            }
        }
    }

    /// Persist the full collection, creating the data directory on first use.
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.path_for(key);
        let content = serde_json::to_string_pretty(records)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    pub fn initialize(&self) -> Result<(), StoreError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root)?;
            info!("Created data directory: {}", self.root.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: String,
        value: i32,
    }

    fn entry(id: &str, value: i32) -> Entry {
        Entry {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn missing_file_yields_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let loaded = store.load_or("entries", Vec::<Entry>::new);
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let records = vec![entry("a", 1), entry("b", 2)];
        store.save("entries", &records).unwrap();

        let reloaded: Vec<Entry> = store.load_or("entries", Vec::new);
        assert_eq!(reloaded, records);
    }

    #[test]
    fn corrupt_file_yields_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("entries.json"), "{not json").unwrap();

        let store = JsonStore::new(dir.path());
        let loaded = store.load_or("entries", || vec![entry("default", 0)]);
        assert_eq!(loaded, vec![entry("default", 0)]);
    }
}
