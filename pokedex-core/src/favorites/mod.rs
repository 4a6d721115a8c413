//! Favorites - durable, user-curated subset of the catalog
//!
//! The whole collection lives as one JSON array under [`FAVORITES_KEY`] in a
//! [`KeyValueStore`](crate::storage::KeyValueStore). [`FavoritesStore`] does
//! a fresh read (or read-modify-write) on every call; [`FavoritesView`] keeps
//! a displayable copy for the presentation layer.

mod error;
mod store;
mod view;

pub use error::FavoritesError;
pub use store::FavoritesStore;
pub use view::FavoritesView;

/// Storage key holding the serialized favorites array
pub const FAVORITES_KEY: &str = "pokemon_favorites";
