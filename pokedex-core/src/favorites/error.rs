use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by favorites mutations. Reads never fail.
#[derive(Error, Debug)]
pub enum FavoritesError {
    #[error("Failed to serialize favorites")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
