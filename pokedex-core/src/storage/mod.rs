//! Key-value persistence primitive
//!
//! String keys, string values, durable across restarts. The favorites store
//! is the only consumer; it keeps one JSON document under one key.
//!
//! Implementations:
//! - [`FileStore`]: one file per key in a data directory
//! - [`MemoryStore`]: process-local, for tests and ephemeral sessions

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Asynchronous string key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Store identifier for logging/debugging
    fn name(&self) -> &'static str;
}

/// Keys are restricted to `[A-Za-z0-9_.-]` and may not start with `.`
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}
