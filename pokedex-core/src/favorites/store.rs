//! FavoritesStore - id-addressed set of creatures over a key-value store

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{FavoritesError, FAVORITES_KEY};
use crate::catalog::Creature;
use crate::storage::KeyValueStore;

/// Durable favorites collection.
///
/// Mutations are serialized through a mutex shared by every clone, so
/// overlapping `add`/`remove`/`toggle`/`clear` calls in one process cannot
/// lose each other's updates. Separate processes remain last-write-wins.
#[derive(Clone)]
pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl FavoritesStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All favorites in insertion order.
    ///
    /// Never fails: a missing key, a read error, invalid JSON or a non-array
    /// value all yield an empty list. Undecodable elements are skipped.
    pub async fn get_all(&self) -> Vec<Creature> {
        match self.storage.get(FAVORITES_KEY).await {
            Ok(raw) => decode(raw.as_deref()),
            Err(e) => {
                warn!("Could not read favorites, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Current list for a read-modify-write. Storage errors propagate so a
    /// failed read is never written back as an empty list.
    async fn read_for_update(&self) -> Result<Vec<Creature>, FavoritesError> {
        let raw = self.storage.get(FAVORITES_KEY).await?;
        Ok(decode(raw.as_deref()))
    }

    /// Add a creature unless one with the same id is already stored
    pub async fn add(&self, creature: &Creature) -> Result<(), FavoritesError> {
        let _guard = self.write_lock.lock().await;

        let mut favorites = self.read_for_update().await?;
        if favorites.iter().any(|f| f.id() == creature.id()) {
            debug!("#{} already in favorites", creature.id());
            return Ok(());
        }

        favorites.push(creature.clone());
        self.write(&favorites).await
    }

    /// Remove every entry with `id`. The list is written back even if nothing matched.
    pub async fn remove(&self, id: u32) -> Result<(), FavoritesError> {
        let _guard = self.write_lock.lock().await;

        let mut favorites = self.read_for_update().await?;
        favorites.retain(|f| f.id() != id);
        self.write(&favorites).await
    }

    pub async fn is_favorite(&self, id: u32) -> bool {
        self.get_all().await.iter().any(|f| f.id() == id)
    }

    /// Remove if present, add otherwise. Returns whether it is now a favorite.
    pub async fn toggle(&self, creature: &Creature) -> Result<bool, FavoritesError> {
        let _guard = self.write_lock.lock().await;

        let mut favorites = self.read_for_update().await?;
        let before = favorites.len();
        favorites.retain(|f| f.id() != creature.id());

        let now_favorite = favorites.len() == before;
        if now_favorite {
            favorites.push(creature.clone());
        }

        self.write(&favorites).await?;
        Ok(now_favorite)
    }

    /// Delete the whole collection
    pub async fn clear(&self) -> Result<(), FavoritesError> {
        let _guard = self.write_lock.lock().await;

        self.storage.delete(FAVORITES_KEY).await?;
        debug!("Cleared favorites in {} store", self.storage.name());
        Ok(())
    }

    async fn write(&self, favorites: &[Creature]) -> Result<(), FavoritesError> {
        let serialized = serde_json::to_string(favorites).map_err(FavoritesError::Serialize)?;
        self.storage.set(FAVORITES_KEY, &serialized).await?;
        debug!(
            "Wrote {} favorite(s) to {} store",
            favorites.len(),
            self.storage.name()
        );
        Ok(())
    }
}

/// Decode the stored document. Absent, invalid or non-array content is empty.
fn decode(raw: Option<&str>) -> Vec<Creature> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => Creature::collect_lenient(values),
        Ok(other) => {
            warn!(
                "Stored favorites are not a list ({}), treating as empty",
                json_kind(&other)
            );
            Vec::new()
        }
        Err(e) => {
            warn!("Stored favorites are not valid JSON, treating as empty: {}", e);
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
