//! HTTP client for the episode REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{EpisodeQuery, Query},
    types::{Character, CharacterID, Episode, EpisodeID, EpisodeResponse},
    Error,
};

/// Request timeout for every API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the episode REST API.
///
/// Performs no retries; retry policy belongs to the caller.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://rickandmortyapi.com/api`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the public API.
    pub fn new() -> Self {
        Self::with_base_url("https://rickandmortyapi.com/api")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decoding(e.to_string())
        })?;

        Ok(parsed)
    }

    /// Fetches one page of the episode listing.
    pub async fn get_episodes(&self, query: &EpisodeQuery) -> Result<EpisodeResponse, Error> {
        self.get::<EpisodeResponse, EpisodeQuery>("/episode", Some(query))
            .await
    }

    /// Fetches a single episode by its numeric ID.
    pub async fn get_episode(&self, episode_id: EpisodeID) -> Result<Episode, Error> {
        self.get::<Episode, EpisodeQuery>(format!("/episode/{}", episode_id).as_str(), None)
            .await
    }

    /// Fetches a single character by its numeric ID.
    pub async fn get_character(&self, character_id: CharacterID) -> Result<Character, Error> {
        self.get::<Character, EpisodeQuery>(format!("/character/{}", character_id).as_str(), None)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
