//! FavoritesView - displayable copy of the favorites for the presentation layer
//!
//! Every mutation goes through the store and is followed by a full re-read,
//! so the view never drifts from what is persisted. A failed mutation leaves
//! the view exactly as it was.

use super::{FavoritesError, FavoritesStore};
use crate::catalog::Creature;

pub struct FavoritesView {
    store: FavoritesStore,
    favorites: Vec<Creature>,
}

impl FavoritesView {
    /// Build a view and populate it from the store
    pub async fn load(store: FavoritesStore) -> Self {
        let favorites = store.get_all().await;
        Self { store, favorites }
    }

    /// Re-read the collection from the store
    pub async fn refresh(&mut self) {
        self.favorites = self.store.get_all().await;
    }

    pub fn favorites(&self) -> &[Creature] {
        &self.favorites
    }

    /// Answered from the cached list, no storage access
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.iter().any(|f| f.id() == id)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub async fn add(&mut self, creature: &Creature) -> Result<(), FavoritesError> {
        self.store.add(creature).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn remove(&mut self, id: u32) -> Result<(), FavoritesError> {
        self.store.remove(id).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn toggle(&mut self, creature: &Creature) -> Result<bool, FavoritesError> {
        let now_favorite = self.store.toggle(creature).await?;
        self.refresh().await;
        Ok(now_favorite)
    }

    pub async fn clear(&mut self) -> Result<(), FavoritesError> {
        self.store.clear().await?;
        self.refresh().await;
        Ok(())
    }
}
