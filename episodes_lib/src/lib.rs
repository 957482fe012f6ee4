//! Data layer for the episode browser: a fetch/cache/paginate state machine
//! over a remote episode API and a local snapshot cache.
//!
//! Wraps the `episodes_api` crate behind the [`EpisodeFetching`] contract,
//! persists the list through [`EpisodeCaching`], and exposes the list screen
//! state through [`EpisodeListViewModel`]. Character details load through
//! [`CharacterDetailLoader`].

pub mod cache;
pub mod character;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod list;
pub mod search;
pub mod store;
pub mod validation;

pub use episodes_api;
pub use episodes_api::types;
pub use episodes_api::{EpisodeQuery, Query};

pub use cache::{CacheService, CharacterCaching, EpisodeCaching, CHARACTERS_KEY, EPISODES_KEY};
pub use character::{CharacterDetailLoader, CharacterState};
pub use config::ListConfig;
pub use error::EpisodesError;
pub use fetcher::{EpisodeFetching, FetchError};
pub use list::{Cursor, EpisodeListViewModel, ListSnapshot, ListState};
pub use search::search_episodes;
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
