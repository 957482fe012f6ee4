use url::Url;

use super::{common::QueryCommon, Query};

/// Query for the paginated `/episode` listing.
///
/// The API filters by substring on `name` and by prefix on the
/// `episode` code (e.g. `S01` for the whole first season).
#[derive(Default, Clone, Debug)]
pub struct EpisodeQuery {
    pub common: QueryCommon,
    pub name: Option<String>,
    pub episode: Option<String>,
}

impl Query for EpisodeQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(name) = &self.name {
            url.query_pairs_mut().append_pair("name", name.as_str());
        };
        if let Some(episode) = &self.episode {
            url.query_pairs_mut().append_pair("episode", episode.as_str());
        };
        url
    }
}

impl EpisodeQuery {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_episode(mut self, episode: &str) -> Self {
        self.episode = Some(episode.to_string());
        self
    }

    /// The requested page number.
    pub fn page(&self) -> u32 {
        self.common.page
    }
}
