//! Pokedex Catalog - creature records, search and filtering
//!
//! The catalog is fetched once per session from a read-only remote source,
//! cached on disk, and held in memory as a [`Catalog`]. All searching
//! happens client-side over that in-memory collection.
//!
//! # Architecture
//!
//! ```text
//! Tyradex API (https://tyradex.app/api/v1)
//!     │
//!     ├── /pokemon              ← Full collection
//!     └── /pokemon/{id}[/{reg}] ← Single record
//!            │
//!            ▼
//!     CatalogLoader ── retry ──► CatalogSource
//!            │
//!            ├── <cache>/catalog.json   ← TTL-bound copy
//!            ▼
//!     Catalog ──► filter::apply_filters(criteria)
//! ```

mod cache;
mod creature;
pub mod filter;
mod http;
mod loader;
mod source;

pub use cache::{CachedCatalog, CatalogCache, CACHE_FILE, DEFAULT_CACHE_TTL};
pub use creature::{Creature, CreatureName, CreatureStats, Sprites, Talent, TypeTag};
pub use filter::FilterCriteria;
pub use http::{HttpCatalogSource, DEFAULT_TIMEOUT};
pub use loader::{CatalogLoader, RetryPolicy};
pub use source::CatalogSource;

/// The session's in-memory creature collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    creatures: Vec<Creature>,
}

impl Catalog {
    pub fn new(creatures: Vec<Creature>) -> Self {
        Self { creatures }
    }

    /// Records matching all criteria, in catalog order
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Creature> {
        filter::apply_filters(criteria, &self.creatures)
    }

    /// Look up a record by Pokédex number
    pub fn get(&self, id: u32) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id() == id)
    }

    pub fn types(&self) -> Vec<String> {
        filter::unique_types(&self.creatures)
    }

    pub fn generations(&self) -> Vec<u32> {
        filter::unique_generations(&self.creatures)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Creature> {
        self.creatures.iter()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;

    fn into_iter(self) -> Self::IntoIter {
        self.creatures.iter()
    }
}
