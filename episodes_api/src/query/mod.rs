mod common;
pub use self::common::Query;

mod episode;
pub use self::episode::EpisodeQuery;
