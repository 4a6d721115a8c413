//! Shared command context: configuration, catalog loader and favorites

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pokedex_core::catalog::{CatalogCache, CatalogLoader, Creature, HttpCatalogSource};
use pokedex_core::config::PokedexConfig;
use pokedex_core::favorites::FavoritesStore;
use pokedex_core::storage::FileStore;

pub struct AppContext {
    config: PokedexConfig,
    data_dir: PathBuf,
}

impl AppContext {
    pub fn new(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = PokedexConfig::load(config_path)?;
        if let Some(dir) = data_dir {
            config.data_dir = Some(dir);
        }

        let data_dir = config.data_dir()?;
        Ok(Self { config, data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn cache(&self) -> Result<CatalogCache> {
        Ok(CatalogCache::new(
            &self.config.cache_dir()?,
            self.config.cache_ttl(),
        ))
    }

    pub fn loader(&self) -> Result<CatalogLoader> {
        let source = HttpCatalogSource::from_config(&self.config)?;
        Ok(CatalogLoader::new(Box::new(source))
            .with_cache(self.cache()?)
            .with_retry(self.config.retry_policy()))
    }

    pub fn favorites(&self) -> FavoritesStore {
        FavoritesStore::new(Arc::new(FileStore::new(&self.data_dir)))
    }

    /// Find a record in the catalog, falling back to the detail endpoint
    pub async fn resolve(&self, id: u32) -> Result<Creature> {
        let loader = self.loader()?;

        match loader.load(false).await {
            Ok(catalog) => {
                if let Some(creature) = catalog.get(id) {
                    return Ok(creature.clone());
                }
            }
            Err(e) => tracing::warn!("Catalog unavailable, trying detail lookup: {:#}", e),
        }

        loader
            .fetch_detail(id, None)
            .await
            .with_context(|| format!("Pokémon #{id} not found"))
    }
}
