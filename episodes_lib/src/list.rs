//! Fetch/cache/paginate state machine behind the episode list screen.
//!
//! [`EpisodeListViewModel`] owns the episode list, the [`ListState`] tag and
//! the pagination [`Cursor`]. All mutation happens under one mutex that is
//! never held across an `.await`, so concurrent calls interleave only at
//! fetcher await points. Observers either poll [`EpisodeListViewModel::snapshot`]
//! or follow [`EpisodeListViewModel::subscribe`].
//!
//! Overlapping calls are reconciled with two counters:
//! - `fetch_generation` moves on every foreground fetch. Only the newest
//!   foreground fetch may commit, so the last one issued wins.
//! - `list_epoch` moves whenever the list is replaced wholesale and when a
//!   network fetch starts. A page loaded for an older list is dropped
//!   instead of appended.

use std::sync::{Mutex, MutexGuard};

use episodes_api::types::Episode;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::cache::EpisodeCaching;
use crate::config::ListConfig;
use crate::fetcher::{EpisodeFetching, FetchError};

/// Failure message for connectivity problems on a full fetch.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
/// Failure message for every other full-fetch error.
pub const DECODING_ERROR_MESSAGE: &str = "Decoding error";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Success,
    Failure(String),
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            ListState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Pagination progress. `total_pages` is 1 until a network page arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl Cursor {
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Everything a UI layer renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSnapshot {
    pub episodes: Vec<Episode>,
    pub state: ListState,
    pub cursor: Cursor,
}

#[derive(Default)]
struct ListInner {
    episodes: Vec<Episode>,
    state: ListState,
    cursor: Cursor,
    is_loading_more: bool,
    last_refresh: Option<Instant>,
    fetch_generation: u64,
    list_epoch: u64,
}

impl ListInner {
    fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            episodes: self.episodes.clone(),
            state: self.state.clone(),
            cursor: self.cursor,
        }
    }
}

/// How a first-page load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchOutcome {
    Cache,
    Network,
    Failed,
    Superseded,
}

/// Clears the pagination in-flight flag when dropped, including when the
/// pagination future is dropped mid-request.
struct LoadMoreGuard<'a> {
    inner: &'a Mutex<ListInner>,
}

impl Drop for LoadMoreGuard<'_> {
    fn drop(&mut self) {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_loading_more = false;
    }
}

/// The episode list state machine.
///
/// Starts `Idle` with an empty list and a `1/1` cursor.
pub struct EpisodeListViewModel<F, C> {
    fetcher: F,
    cache: C,
    config: ListConfig,
    inner: Mutex<ListInner>,
    updates: watch::Sender<ListSnapshot>,
}

impl<F, C> EpisodeListViewModel<F, C>
where
    F: EpisodeFetching,
    C: EpisodeCaching,
{
    pub fn new(fetcher: F, cache: C) -> Self {
        Self::with_config(fetcher, cache, ListConfig::default())
    }

    pub fn with_config(fetcher: F, cache: C, config: ListConfig) -> Self {
        let (updates, _) = watch::channel(ListSnapshot::default());
        Self {
            fetcher,
            cache,
            config,
            inner: Mutex::new(ListInner::default()),
            updates,
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn episodes(&self) -> Vec<Episode> {
        self.lock().episodes.clone()
    }

    pub fn state(&self) -> ListState {
        self.lock().state.clone()
    }

    pub fn cursor(&self) -> Cursor {
        self.lock().cursor
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.lock().snapshot()
    }

    /// Receives a fresh [`ListSnapshot`] after every published change.
    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot> {
        self.updates.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, ListInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self, inner: &ListInner) {
        self.updates.send_replace(inner.snapshot());
    }

    /// Loads the first page, from cache when possible.
    ///
    /// A forced fetch clears the cache first and always goes to the network.
    /// A cache hit leaves the cursor untouched, so after a restart
    /// pagination stays blocked until a network fetch reports the real page
    /// count.
    pub async fn fetch(&self, force_refresh: bool) {
        self.load_first_page(force_refresh).await;
    }

    async fn load_first_page(&self, force_refresh: bool) -> FetchOutcome {
        let cached = if force_refresh {
            self.cache.clear_episodes();
            None
        } else {
            self.cache
                .load_episodes()
                .filter(|episodes| !episodes.is_empty())
        };

        let generation = {
            let mut inner = self.lock();
            inner.fetch_generation += 1;
            if let Some(episodes) = cached {
                tracing::debug!("Serving {} episodes from cache", episodes.len());
                inner.episodes = episodes;
                inner.state = ListState::Success;
                inner.list_epoch += 1;
                self.publish(&inner);
                return FetchOutcome::Cache;
            }
            inner.state = ListState::Loading;
            // pages requested for the outgoing list must not land in the cache
            inner.list_epoch += 1;
            self.publish(&inner);
            inner.fetch_generation
        };

        let result = self.fetcher.fetch_episodes(1).await;

        let mut inner = self.lock();
        if inner.fetch_generation != generation {
            tracing::debug!("Dropping first page from superseded fetch {}", generation);
            return FetchOutcome::Superseded;
        }
        inner.list_epoch += 1;
        let outcome = match result {
            Ok(page) => {
                self.cache.save_episodes(&page.results);
                inner.episodes = page.results;
                inner.state = ListState::Success;
                inner.cursor = Cursor {
                    current_page: 1,
                    total_pages: page.info.pages.max(1),
                };
                FetchOutcome::Network
            }
            Err(e) => {
                tracing::warn!("Episode fetch failed: {}", e);
                let message = match e {
                    FetchError::Transport(_) => NETWORK_ERROR_MESSAGE,
                    FetchError::Decoding(_) => DECODING_ERROR_MESSAGE,
                };
                inner.episodes.clear();
                inner.state = ListState::Failure(message.to_string());
                FetchOutcome::Failed
            }
        };
        self.publish(&inner);
        outcome
    }

    /// Loads the next page when `after` is the current tail of the list.
    ///
    /// Does nothing while another page is loading, when the cursor is on the
    /// last page, or when `after` is not the last episode. Errors are
    /// swallowed and leave the list as it was.
    pub async fn load_more_if_needed(&self, after: &Episode) {
        let (next_page, epoch) = {
            let mut inner = self.lock();
            let is_tail = inner.episodes.last().map(|e| e.id) == Some(after.id);
            if inner.is_loading_more || !inner.cursor.has_more() || !is_tail {
                return;
            }
            inner.is_loading_more = true;
            (inner.cursor.current_page + 1, inner.list_epoch)
        };
        let _guard = LoadMoreGuard { inner: &self.inner };

        let result = self.fetcher.fetch_episodes(next_page).await;

        let mut inner = self.lock();
        if inner.list_epoch != epoch {
            tracing::debug!("Dropping page {} loaded for a replaced list", next_page);
            return;
        }
        match result {
            Ok(page) => {
                inner.episodes.extend(page.results);
                self.cache.save_episodes(&inner.episodes);
                inner.cursor = Cursor {
                    current_page: next_page,
                    total_pages: page.info.pages.max(next_page),
                };
                self.publish(&inner);
            }
            Err(e) => {
                tracing::debug!("Ignoring failure loading page {}: {}", next_page, e);
            }
        }
    }

    /// Forces a network refresh unless the last successful one is younger
    /// than the configured refresh interval.
    pub async fn refresh_if_needed(&self) {
        let due = self
            .lock()
            .last_refresh
            .map_or(true, |at| at.elapsed() >= self.config.refresh_interval);
        if !due {
            tracing::debug!("Skipping refresh, last one is recent");
            return;
        }
        if self.load_first_page(true).await == FetchOutcome::Network {
            self.lock().last_refresh = Some(Instant::now());
        }
    }

    /// Refreshes page 1 without touching [`ListState`].
    ///
    /// Intended for when no UI is visible. Returns `false` and leaves the
    /// list untouched if the fetch fails or a foreground fetch overtook it.
    pub async fn perform_background_refresh(&self) -> bool {
        let (generation, epoch) = {
            let inner = self.lock();
            (inner.fetch_generation, inner.list_epoch)
        };

        let page = match self.fetcher.fetch_episodes(1).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Background refresh failed: {}", e);
                return false;
            }
        };

        let mut inner = self.lock();
        if inner.fetch_generation != generation || inner.list_epoch != epoch {
            tracing::debug!("Dropping background refresh overtaken by a foreground fetch");
            return false;
        }
        self.cache.save_episodes(&page.results);
        inner.episodes = page.results;
        inner.cursor = Cursor {
            current_page: 1,
            total_pages: page.info.pages.max(1),
        };
        inner.list_epoch += 1;
        self.publish(&inner);
        true
    }
}
