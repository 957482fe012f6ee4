//! Key-value stores that back the episode cache.

mod memory;
mod sqlite;

pub use self::memory::MemoryStore;
pub use self::sqlite::SqliteStore;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Opaque byte storage addressed by string keys.
///
/// Implementations must be shareable across tasks; the cache layer calls
/// them synchronously.
pub trait KeyValueStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Returns the bytes stored under `key`, if any.
    fn data(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
