//! In-memory doubles for the fetcher and cache contracts.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use episodes_lib::types::{
    Character, CharacterID, Episode, EpisodeID, EpisodeResponse, PageInfo, Place,
};
use episodes_lib::{EpisodeCaching, EpisodeFetching, FetchError};
use tokio::sync::oneshot;

/// Shared, ordered record of collaborator calls, e.g. `"cache.clear"`, `"fetch.page(1)"`.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }
}

pub fn episode(id: EpisodeID, name: &str) -> Episode {
    Episode {
        id,
        name: name.to_string(),
        air_date: "December 2, 2013".to_string(),
        episode: format!("S01E{:02}", id),
        characters: vec![
            "https://rickandmortyapi.com/api/character/1".to_string(),
            "https://rickandmortyapi.com/api/character/2".to_string(),
        ],
        url: format!("https://rickandmortyapi.com/api/episode/{}", id),
        created: "2017-11-10T12:56:33.798Z".to_string(),
    }
}

pub fn character(id: CharacterID, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: "Alive".to_string(),
        species: "Human".to_string(),
        kind: String::new(),
        gender: "Male".to_string(),
        origin: Place {
            name: "Earth (C-137)".to_string(),
            url: "https://rickandmortyapi.com/api/location/1".to_string(),
        },
        location: Place {
            name: "Citadel of Ricks".to_string(),
            url: "https://rickandmortyapi.com/api/location/3".to_string(),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string()],
        url: format!("https://rickandmortyapi.com/api/character/{}", id),
        created: "2017-11-04T18:48:46.250Z".to_string(),
    }
}

pub fn page(results: Vec<Episode>, pages: u32) -> EpisodeResponse {
    EpisodeResponse {
        info: PageInfo {
            count: results.len() as u32,
            pages,
            next: None,
            prev: None,
        },
        results,
    }
}

type FetchResult = Result<EpisodeResponse, FetchError>;

#[derive(Default)]
struct FetcherState {
    /// Sticky result, returned whenever no per-page result is queued.
    result: Option<FetchResult>,
    by_page: HashMap<u32, VecDeque<FetchResult>>,
    episode_result: Option<Result<Episode, FetchError>>,
    characters: HashMap<CharacterID, Result<Character, FetchError>>,
    requested_characters: Vec<CharacterID>,
    requested_pages: Vec<u32>,
    requested_episodes: Vec<EpisodeID>,
    deferred: bool,
    pending: Vec<(u32, oneshot::Sender<FetchResult>)>,
}

/// Scriptable [`EpisodeFetching`] double.
///
/// In deferred mode every page request parks until the test resolves it
/// with [`MockEpisodeFetcher::resolve`], in any order.
#[derive(Clone, Default)]
pub struct MockEpisodeFetcher {
    state: Arc<Mutex<FetcherState>>,
    journal: Journal,
}

impl MockEpisodeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            ..Self::default()
        }
    }

    pub fn respond_with(&self, result: FetchResult) {
        self.state.lock().unwrap().result = Some(result);
    }

    pub fn respond_to_page(&self, page: u32, result: FetchResult) {
        self.state
            .lock()
            .unwrap()
            .by_page
            .entry(page)
            .or_default()
            .push_back(result);
    }

    pub fn respond_to_episode(&self, result: Result<Episode, FetchError>) {
        self.state.lock().unwrap().episode_result = Some(result);
    }

    pub fn respond_to_character(&self, id: CharacterID, result: Result<Character, FetchError>) {
        self.state.lock().unwrap().characters.insert(id, result);
    }

    pub fn defer(&self) {
        self.state.lock().unwrap().deferred = true;
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().unwrap().pending.len()
    }

    /// Pages of the parked requests, oldest first.
    pub fn pending_pages(&self) -> Vec<u32> {
        self.state
            .lock()
            .unwrap()
            .pending
            .iter()
            .map(|(page, _)| *page)
            .collect()
    }

    /// Completes the parked request at `index` (0 = oldest still parked).
    pub fn resolve(&self, index: usize, result: FetchResult) {
        let (_, tx) = self.state.lock().unwrap().pending.remove(index);
        let _ = tx.send(result);
    }

    /// Yields until `count` requests are parked.
    pub async fn wait_for_pending(&self, count: usize) {
        while self.pending_count() < count {
            tokio::task::yield_now().await;
        }
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().requested_pages.len()
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.state.lock().unwrap().requested_pages.clone()
    }

    pub fn requested_episodes(&self) -> Vec<EpisodeID> {
        self.state.lock().unwrap().requested_episodes.clone()
    }

    pub fn requested_characters(&self) -> Vec<CharacterID> {
        self.state.lock().unwrap().requested_characters.clone()
    }
}

#[async_trait]
impl EpisodeFetching for MockEpisodeFetcher {
    async fn fetch_episodes(&self, page: u32) -> Result<EpisodeResponse, FetchError> {
        self.journal.record(format!("fetch.page({})", page));
        let parked = {
            let mut state = self.state.lock().unwrap();
            state.requested_pages.push(page);
            if state.deferred {
                let (tx, rx) = oneshot::channel();
                state.pending.push((page, tx));
                Some(rx)
            } else {
                None
            }
        };
        if let Some(rx) = parked {
            return rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Transport("request abandoned".to_string())));
        }

        let mut state = self.state.lock().unwrap();
        if let Some(result) = state.by_page.get_mut(&page).and_then(|q| q.pop_front()) {
            return result;
        }
        state
            .result
            .clone()
            .expect("MockEpisodeFetcher result not set")
    }

    async fn fetch_episode(&self, id: EpisodeID) -> Result<Episode, FetchError> {
        self.journal.record(format!("fetch.episode({})", id));
        let mut state = self.state.lock().unwrap();
        state.requested_episodes.push(id);
        state
            .episode_result
            .clone()
            .expect("MockEpisodeFetcher episode result not set")
    }

    async fn fetch_character(&self, id: CharacterID) -> Result<Character, FetchError> {
        self.journal.record(format!("fetch.character({})", id));
        tokio::task::yield_now().await;
        let mut state = self.state.lock().unwrap();
        state.requested_characters.push(id);
        state
            .characters
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Decoding(format!("no character {}", id))))
    }
}

#[derive(Default)]
struct CacheState {
    stored: Option<Vec<Episode>>,
    save_calls: usize,
    load_calls: usize,
    clear_calls: usize,
}

/// [`EpisodeCaching`] double that records every call.
#[derive(Clone, Default)]
pub struct MockEpisodeCache {
    state: Arc<Mutex<CacheState>>,
    journal: Journal,
}

impl MockEpisodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            ..Self::default()
        }
    }

    pub fn store(&self, episodes: Vec<Episode>) {
        self.state.lock().unwrap().stored = Some(episodes);
    }

    pub fn stored(&self) -> Option<Vec<Episode>> {
        self.state.lock().unwrap().stored.clone()
    }

    pub fn save_calls(&self) -> usize {
        self.state.lock().unwrap().save_calls
    }

    pub fn load_calls(&self) -> usize {
        self.state.lock().unwrap().load_calls
    }

    pub fn clear_calls(&self) -> usize {
        self.state.lock().unwrap().clear_calls
    }
}

impl EpisodeCaching for MockEpisodeCache {
    fn save_episodes(&self, episodes: &[Episode]) {
        self.journal.record("cache.save");
        let mut state = self.state.lock().unwrap();
        state.save_calls += 1;
        state.stored = Some(episodes.to_vec());
    }

    fn load_episodes(&self) -> Option<Vec<Episode>> {
        self.journal.record("cache.load");
        let mut state = self.state.lock().unwrap();
        state.load_calls += 1;
        state.stored.clone()
    }

    fn clear_episodes(&self) {
        self.journal.record("cache.clear");
        let mut state = self.state.lock().unwrap();
        state.clear_calls += 1;
        state.stored = None;
    }
}
