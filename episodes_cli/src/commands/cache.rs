//! The `clear-cache` subcommand.

use episodes_lib::{CacheService, EpisodeCaching, SqliteStore};

pub fn clear(cache: &CacheService<SqliteStore>) {
    cache.clear_episodes();
    eprintln!("Episode cache cleared");
}
