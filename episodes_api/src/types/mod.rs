mod meta;
pub use self::meta::{PageInfo, PaginatedResponse};

mod character;
pub use self::character::{Character, CharacterID, Location, Origin, Place};

mod episode;
pub use self::episode::{Episode, EpisodeID, EpisodeResponse};
