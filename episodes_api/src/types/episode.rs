//! Episode records returned by the `/episode` endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::PaginatedResponse;

/// Numeric identifier for an episode.
pub type EpisodeID = i64;

/// One page of the `/episode` listing.
pub type EpisodeResponse = PaginatedResponse<Episode>;

/// A single episode. Immutable once decoded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Episode {
    /// Unique, stable episode identifier.
    pub id: EpisodeID,

    pub name: String,

    /// Air date as published, e.g. `"December 2, 2013"`. Snake case on the wire.
    pub air_date: String,

    /// Season/episode code, e.g. `"S01E01"`.
    pub episode: String,

    /// Character resource URLs. The last path segment is the character id.
    pub characters: Vec<String>,

    pub url: String,

    /// Creation timestamp in RFC 3339 form.
    pub created: String,
}

impl Episode {
    /// Character ids parsed from the last non-empty segment of each character URL.
    ///
    /// References without a numeric trailing segment are skipped.
    pub fn character_ids(&self) -> Vec<i64> {
        self.characters
            .iter()
            .filter_map(|url| {
                url.rsplit('/')
                    .find(|segment| !segment.is_empty())?
                    .parse::<i64>()
                    .ok()
            })
            .collect()
    }

    /// Parses the long form (`December 2, 2013`), falling back to `02/12/2013`.
    pub fn air_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.air_date, "%B %d, %Y")
            .or_else(|_| NaiveDate::parse_from_str(&self.air_date, "%d/%m/%Y"))
            .ok()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Splits an `SxxEyy` code into `(season, episode)`.
    pub fn season_and_number(&self) -> Option<(u32, u32)> {
        let rest = self.episode.strip_prefix('S')?;
        let (season, number) = rest.split_once('E')?;
        Some((season.parse().ok()?, number.parse().ok()?))
    }
}
