//! Tunables for the list state machine.

use std::time::Duration;

/// Minimum time between two foreground refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    pub refresh_interval: Duration,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl ListConfig {
    /// Reads `EPISODES_REFRESH_INTERVAL_SECS`, falling back to the default
    /// when unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            refresh_interval: Duration::from_secs(env_u64(
                "EPISODES_REFRESH_INTERVAL_SECS",
                DEFAULT_REFRESH_INTERVAL.as_secs(),
            )),
        }
    }

    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}
