//! Remote source of episode pages and character details.

use async_trait::async_trait;
use episodes_api::types::{Character, CharacterID, Episode, EpisodeID, EpisodeResponse};
use episodes_api::{Client, EpisodeQuery, Query};

/// The two failure categories the list layer distinguishes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No connectivity, timeout, or a dropped connection.
    #[error("Transport error: {0}")]
    Transport(String),
    /// The payload could not be turned into the expected types.
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl From<episodes_api::Error> for FetchError {
    fn from(e: episodes_api::Error) -> Self {
        match e {
            episodes_api::Error::Transport(msg) => Self::Transport(msg),
            other => Self::Decoding(other.to_string()),
        }
    }
}

/// Paginated remote episode source. Implementations do not retry.
#[async_trait]
pub trait EpisodeFetching: Send + Sync {
    /// Fetches page `page` (1-indexed) of the episode listing.
    async fn fetch_episodes(&self, page: u32) -> Result<EpisodeResponse, FetchError>;

    /// Fetches one episode by id.
    async fn fetch_episode(&self, id: EpisodeID) -> Result<Episode, FetchError>;

    /// Fetches one character by id.
    async fn fetch_character(&self, id: CharacterID) -> Result<Character, FetchError>;
}

#[async_trait]
impl EpisodeFetching for Client {
    async fn fetch_episodes(&self, page: u32) -> Result<EpisodeResponse, FetchError> {
        let query = EpisodeQuery::default().with_page(page);
        Ok(self.get_episodes(&query).await?)
    }

    async fn fetch_episode(&self, id: EpisodeID) -> Result<Episode, FetchError> {
        Ok(self.get_episode(id).await?)
    }

    async fn fetch_character(&self, id: CharacterID) -> Result<Character, FetchError> {
        Ok(self.get_character(id).await?)
    }
}
