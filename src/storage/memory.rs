//! In-memory key-value store.
//!
//! Used as the test fake and by hosts that do not want transfer records to
//! outlive the process.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// A [`KeyValueStore`] backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    // Mutex only so the trait can take &self; access is single-threaded.
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.entries().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries().clear();
        Ok(())
    }
}
