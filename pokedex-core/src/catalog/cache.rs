//! On-disk catalog cache
//!
//! Keeps the last fetched collection in `<cache dir>/catalog.json` together
//! with the time it was fetched. Entries older than the TTL are ignored.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::Creature;

/// Cache file name inside the cache directory
pub const CACHE_FILE: &str = "catalog.json";

/// Default cache TTL (1 hour)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Cached collection with its fetch time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedCatalog {
    /// When the collection was fetched
    pub cached_at: DateTime<Utc>,

    /// The cached records
    pub creatures: Vec<Creature>,
}

/// File-backed catalog cache
#[derive(Debug, Clone)]
pub struct CatalogCache {
    path: PathBuf,
    ttl: Duration,
}

impl CatalogCache {
    pub fn new(cache_dir: &Path, ttl: Duration) -> Self {
        Self {
            path: cache_dir.join(CACHE_FILE),
            ttl,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached collection if it is younger than the TTL
    pub fn load(&self) -> Result<Option<Vec<Creature>>> {
        self.load_at(Utc::now())
    }

    fn load_at(&self, now: DateTime<Utc>) -> Result<Option<Vec<Creature>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cache: {}", self.path.display()))?;

        let cached: CachedCatalog = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse cache: {}", self.path.display()))?;

        // Clock skew (cached_at in the future) counts as fresh
        let age = (now - cached.cached_at).to_std().unwrap_or_default();

        if age > self.ttl {
            tracing::debug!("Catalog cache expired (age: {:?})", age);
            return Ok(None);
        }

        tracing::debug!(
            "Using cached catalog: {} records (age: {:?})",
            cached.creatures.len(),
            age
        );
        Ok(Some(cached.creatures))
    }

    /// Save a freshly fetched collection
    pub fn save(&self, creatures: &[Creature]) -> Result<()> {
        self.save_at(creatures, Utc::now())
    }

    fn save_at(&self, creatures: &[Creature], cached_at: DateTime<Utc>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create cache directory: {}", parent.display())
            })?;
        }

        let cached = CachedCatalog {
            cached_at,
            creatures: creatures.to_vec(),
        };

        let content = serde_json::to_string(&cached).context("Failed to serialize cache")?;

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write cache: {}", self.path.display()))?;

        tracing::debug!("Saved catalog to cache: {}", self.path.display());
        Ok(())
    }

    /// Remove the cache file. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove cache: {}", self.path.display())),
        }
    }
}
