//! File-backed key-value store
//!
//! Each key is a file named after the key inside the store directory.
//! Writes land in a hidden temporary sibling first and are renamed into place,
//! so a crash mid-write never leaves a truncated value behind.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{validate_key, KeyValueStore, StorageError};

/// Directory of one-file-per-key values
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                debug!("Read '{}' ({} bytes)", key, value.len());
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("'{}' not found in {}", key, self.root.display());
                Ok(None)
            }
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                path,
                source,
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp_path = self.root.join(format!(".{key}.tmp"));

        let write_error = |path: &Path, source: std::io::Error| StorageError::Write {
            key: key.to_string(),
            path: path.to_path_buf(),
            source,
        };

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| write_error(&self.root, e))?;

        tokio::fs::write(&tmp_path, value)
            .await
            .map_err(|e| write_error(&tmp_path, e))?;

        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| write_error(&path, e))?;

        debug!("Saved '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Removed '{}'", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Delete {
                key: key.to_string(),
                path,
                source,
            }),
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
