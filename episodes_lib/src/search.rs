//! Validated server-side episode search. Bypasses the list and its cache.

use episodes_api::types::EpisodeResponse;
use episodes_api::{Client, EpisodeQuery, Query};

use crate::error::EpisodesError;
use crate::validation;

/// Runs a filtered `/episode` query after validating every input.
///
/// `name` matches as a substring on the server; `code` is a season (`S01`)
/// or a full episode code (`S01E04`).
pub async fn search_episodes(
    client: &Client,
    name: Option<&str>,
    code: Option<&str>,
    page: u32,
) -> Result<EpisodeResponse, EpisodesError> {
    let mut query = EpisodeQuery::default().with_page(validation::validate_pages(page)?);
    if let Some(name) = name {
        query = query.with_name(&validation::validate_name(name)?);
    }
    if let Some(code) = code {
        query = query.with_episode(&validation::validate_episode_code(code)?);
    }

    tracing::debug!("Searching episodes, page {}", query.page());
    Ok(client.get_episodes(&query).await?)
}
