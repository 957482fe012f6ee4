//! Local persistence of the episode list and loaded characters.

use std::path::Path;

use episodes_api::types::{Character, Episode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::EpisodesError;
use crate::store::{KeyValueStore, SqliteStore};

/// Key under which the serialized episode list is stored.
pub const EPISODES_KEY: &str = "cachedEpisodes";
/// Key under which the serialized character list is stored.
pub const CHARACTERS_KEY: &str = "cachedCharacters";

/// Local snapshot of the full episode list.
///
/// None of these calls fail from the caller's point of view: a corrupt or
/// unreadable snapshot is indistinguishable from no snapshot.
pub trait EpisodeCaching: Send + Sync {
    /// Replaces the stored snapshot wholesale.
    fn save_episodes(&self, episodes: &[Episode]);

    /// Returns the stored snapshot, or `None` if absent or undecodable.
    fn load_episodes(&self) -> Option<Vec<Episode>>;

    fn clear_episodes(&self);
}

/// Local snapshot of characters, with the same failure rules as [`EpisodeCaching`].
pub trait CharacterCaching: Send + Sync {
    fn save_characters(&self, characters: &[Character]);

    fn load_characters(&self) -> Option<Vec<Character>>;
}

/// [`EpisodeCaching`] and [`CharacterCaching`] over any [`KeyValueStore`],
/// storing JSON under [`EPISODES_KEY`] and [`CHARACTERS_KEY`].
pub struct CacheService<S> {
    store: S,
}

impl CacheService<SqliteStore> {
    /// Opens (or creates) the SQLite database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EpisodesError> {
        Ok(Self::new(SqliteStore::open(path)?))
    }
}

impl<S: KeyValueStore> CacheService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_vec(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to encode {} for cache: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.store.set(key, json) {
            tracing::warn!("Failed to write {} cache: {}", key, e);
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let data = match self.store.data(key) {
            Ok(data) => data?,
            Err(e) => {
                tracing::warn!("Failed to read {} cache: {}", key, e);
                return None;
            }
        };
        match serde_json::from_slice(&data) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Discarding undecodable {} cache: {}", key, e);
                None
            }
        }
    }
}

impl<S: KeyValueStore> EpisodeCaching for CacheService<S> {
    fn save_episodes(&self, episodes: &[Episode]) {
        self.write(EPISODES_KEY, episodes);
    }

    fn load_episodes(&self) -> Option<Vec<Episode>> {
        self.read(EPISODES_KEY)
    }

    fn clear_episodes(&self) {
        if let Err(e) = self.store.remove(EPISODES_KEY) {
            tracing::warn!("Failed to clear episode cache: {}", e);
        }
    }
}

impl<S: KeyValueStore> CharacterCaching for CacheService<S> {
    fn save_characters(&self, characters: &[Character]) {
        self.write(CHARACTERS_KEY, characters);
    }

    fn load_characters(&self) -> Option<Vec<Character>> {
        self.read(CHARACTERS_KEY)
    }
}
