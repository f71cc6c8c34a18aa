//! Persistent key-value storage.
//!
//! The transfer record lives in a store satisfying [`KeyValueStore`].
//! Hosts inject their own implementation; [`FileStore`] persists the key
//! space as a single JSON file, [`MemoryStore`] keeps it in memory.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde_json::Value;

use crate::error::Result;

/// Capability interface for persistent string-keyed JSON storage.
///
/// The store is the single source of truth: callers read fresh on every
/// access and never cache values across operations.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Delete the value stored under `key`. Deleting an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Delete every key in the store.
    fn clear(&self) -> Result<()>;
}
