//! Catalog source trait - Abstraction over where creature records come from
//!
//! This trait allows swapping between:
//! - The Tyradex HTTP API ([`super::HttpCatalogSource`])
//! - Mock sources (testing)

use anyhow::Result;
use async_trait::async_trait;

use super::Creature;

/// Read-only provider of creature records
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full collection
    async fn fetch_all(&self) -> Result<Vec<Creature>>;

    /// Fetch one record, optionally in a regional form (e.g. "alola")
    async fn fetch_by_id(&self, id: u32, region: Option<&str>) -> Result<Creature>;

    /// Source identifier for logging/debugging
    fn name(&self) -> &'static str;
}
