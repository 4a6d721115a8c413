//! Catalog loading with caching and retry
//!
//! The loader is the caller of the [`CatalogSource`], so transient fetch
//! failures are retried here with capped exponential backoff.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use super::{Catalog, CatalogCache, CatalogSource, Creature};

/// Retry schedule for remote fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry
    pub base_delay: Duration,

    /// Upper bound for any single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Delay before retry number `attempt` (0-based): `min(base * 2^attempt, max)`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Loads the session catalog from cache or source
pub struct CatalogLoader {
    source: Box<dyn CatalogSource>,
    cache: Option<CatalogCache>,
    retry: RetryPolicy,
}

impl CatalogLoader {
    pub fn new(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source,
            cache: None,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_cache(mut self, cache: CatalogCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Load the full catalog
    ///
    /// Uses the cached copy if available and fresh. Set `force_refresh` to
    /// bypass the cache and fetch from the source.
    pub async fn load(&self, force_refresh: bool) -> Result<Catalog> {
        if !force_refresh {
            if let Some(cache) = &self.cache {
                match cache.load() {
                    Ok(Some(creatures)) => return Ok(Catalog::new(creatures)),
                    Ok(None) => debug!("No fresh catalog cache"),
                    Err(e) => warn!("Ignoring unreadable catalog cache: {:#}", e),
                }
            }
        }

        let creatures = self
            .retrying("Catalog fetch", || self.source.fetch_all())
            .await?;

        debug!(
            "Fetched catalog from '{}': {} records",
            self.source.name(),
            creatures.len()
        );

        // Caching is best effort
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.save(&creatures) {
                warn!("Failed to save catalog to cache: {:#}", e);
            }
        }

        Ok(Catalog::new(creatures))
    }

    /// Fetch a single record from the source, bypassing the cache
    pub async fn fetch_detail(&self, id: u32, region: Option<&str>) -> Result<Creature> {
        self.retrying(&format!("Fetch of #{id}"), || {
            self.source.fetch_by_id(id, region)
        })
        .await
    }

    async fn retrying<T, F, Fut>(&self, what: &str, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;

        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retry.max_retries => {
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        "{} failed (attempt {}): {:#}. Retrying in {:?}",
                        what,
                        attempt + 1,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(e.context(format!("{} failed after {} attempt(s)", what, attempt + 1)))
                }
            }
        }
    }
}
