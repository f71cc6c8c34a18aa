//! File-backed key-value store.
//!
//! Persists the whole key space as one JSON object in `store.json` under a
//! root directory. This is the default store for hosts that want transfer
//! records to survive a process restart.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{HandoffError, Result};
use crate::storage::KeyValueStore;

/// Store file name inside the root directory.
pub const STORE_FILE: &str = "store.json";

/// A [`KeyValueStore`] backed by a single JSON file on disk.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory and store file are
    /// created lazily on first write.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Get the store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn store_path(&self) -> PathBuf {
        self.root.join(STORE_FILE)
    }

    /// Load the full key space from disk. A missing file reads as empty.
    fn load(&self) -> Result<Map<String, Value>> {
        let store_path = self.store_path();

        if !store_path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&store_path).map_err(|e| HandoffError::StoreRead {
            path: store_path.clone(),
            source: e,
        })?;

        let value: Value = serde_json::from_str(&content)?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(HandoffError::StoreCorrupt { path: store_path }),
        }
    }

    /// Write the full key space back to disk.
    fn save(&self, entries: &Map<String, Value>) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| HandoffError::DirectoryCreate {
                path: self.root.clone(),
                source: e,
            })?;
        }

        let store_path = self.store_path();
        let content = serde_json::to_string_pretty(entries)?;

        fs::write(&store_path, content).map_err(|e| HandoffError::StoreWrite {
            path: store_path,
            source: e,
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let entries = self.load()?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.save(&entries)?;
        debug!(key, "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
            debug!(key, "removed value");
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let store_path = self.store_path();
        if store_path.exists() {
            fs::remove_file(&store_path).map_err(|e| HandoffError::StoreWrite {
                path: store_path,
                source: e,
            })?;
        }
        Ok(())
    }
}
