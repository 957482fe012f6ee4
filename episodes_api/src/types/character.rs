//! Character records returned by `/character/<id>`.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a character.
pub type CharacterID = i64;

/// A named place with its resource URL. `url` is empty when unknown.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Place {
    pub name: String,
    pub url: String,
}

/// Where a character comes from.
pub type Origin = Place;

/// Where a character was last seen.
pub type Location = Place;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterID,
    pub name: String,
    /// `Alive`, `Dead` or `unknown`.
    pub status: String,
    pub species: String,
    /// Subspecies or variant; usually empty.
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: Origin,
    pub location: Location,
    /// Avatar image URL.
    pub image: String,
    /// URLs of the episodes the character appears in.
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

impl Character {
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}
