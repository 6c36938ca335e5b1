//! Persistent key-value storage port.

use crate::error::Result;

/// String key-value storage that survives restarts.
///
/// Mirrors the small surface the cache needs: get, overwrite, delete.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
