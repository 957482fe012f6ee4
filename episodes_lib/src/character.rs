//! Loader behind the character detail screen.
//!
//! One [`CharacterDetailLoader`] drives one screen: `Idle`, then `Loading`,
//! then `Success` or `Failure`. Successful loads are also remembered in the
//! character cache so they can be shown later without a request.

use std::sync::atomic::{AtomicU64, Ordering};

use episodes_api::types::{Character, CharacterID};
use tokio::sync::watch;

use crate::cache::CharacterCaching;
use crate::fetcher::EpisodeFetching;

/// Failure message for any character load error.
pub const CHARACTER_FAILURE_MESSAGE: &str = "Failed to load character";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CharacterState {
    #[default]
    Idle,
    Loading,
    Success(Character),
    Failure(String),
}

impl CharacterState {
    pub fn is_success(&self) -> bool {
        matches!(self, CharacterState::Success(_))
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            CharacterState::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn character(&self) -> Option<&Character> {
        match self {
            CharacterState::Success(character) => Some(character),
            _ => None,
        }
    }
}

pub struct CharacterDetailLoader<F, C> {
    fetcher: F,
    cache: C,
    state: watch::Sender<CharacterState>,
    request: AtomicU64,
}

impl<F, C> CharacterDetailLoader<F, C>
where
    F: EpisodeFetching,
    C: CharacterCaching,
{
    pub fn new(fetcher: F, cache: C) -> Self {
        let (state, _) = watch::channel(CharacterState::Idle);
        Self {
            fetcher,
            cache,
            state,
            request: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> CharacterState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CharacterState> {
        self.state.subscribe()
    }

    /// Loads character `id`. Only the most recent load or [`reset`] may
    /// change the state; an older load that finishes later is dropped.
    ///
    /// [`reset`]: CharacterDetailLoader::reset
    pub async fn load_character(&self, id: CharacterID) {
        let request = self.request.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(CharacterState::Loading);

        let result = self.fetcher.fetch_character(id).await;

        if self.request.load(Ordering::SeqCst) != request {
            tracing::debug!("Dropping superseded load of character {}", id);
            return;
        }
        match result {
            Ok(character) => {
                self.remember(&character);
                self.state.send_replace(CharacterState::Success(character));
            }
            Err(e) => {
                tracing::warn!("Character {} failed to load: {}", id, e);
                self.state
                    .send_replace(CharacterState::Failure(CHARACTER_FAILURE_MESSAGE.to_string()));
            }
        }
    }

    /// Back to `Idle`, abandoning any load in flight.
    pub fn reset(&self) {
        self.request.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(CharacterState::Idle);
    }

    /// A previously loaded character, if the cache still has it.
    pub fn cached_character(&self, id: CharacterID) -> Option<Character> {
        self.cache
            .load_characters()?
            .into_iter()
            .find(|c| c.id == id)
    }

    fn remember(&self, character: &Character) {
        let mut characters = self.cache.load_characters().unwrap_or_default();
        match characters.iter_mut().find(|c| c.id == character.id) {
            Some(existing) => *existing = character.clone(),
            None => characters.push(character.clone()),
        }
        self.cache.save_characters(&characters);
    }
}
