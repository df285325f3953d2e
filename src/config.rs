//! Runtime configuration from environment variables.
//!
//! - `BLOCKFALL_SEED`: fixed seed for the piece randomizer (default: random)
//! - `BLOCKFALL_TICK_MS`: gravity period in milliseconds (default: 500, capped at 60000)
//! - `BLOCKFALL_LOG_PATH`: log file; logging is off when unset or empty
//!
//! Unparseable values fall back to the defaults.

use std::time::Duration;

use crate::types::TICK_MS;

/// Longest accepted gravity period.
pub const MAX_TICK_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u64>,
    pub tick_ms: u64,
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS as u64,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let tick_ms = lookup("BLOCKFALL_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .map(|ms| ms.min(MAX_TICK_MS))
            .unwrap_or(TICK_MS as u64);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
