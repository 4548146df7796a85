//! Cache configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use pokedex_core::constants::DEFAULT_CACHE_TTL;
use pokedex_core::error::{PokedexError, Result};

/// Cache configuration.
///
/// TTL and reap interval are independent; [`CacheConfig::new`] sets both to
/// the same value.
///
/// # Example
///
/// ```rust
/// use pokedex_cache::CacheConfig;
/// use std::time::Duration;
///
/// let config = CacheConfig::new(Duration::from_secs(60))
///     .with_reap_interval(Duration::from_secs(10));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Age at which an entry becomes eligible for reaping
    pub ttl: Duration,
    /// Time between reaper sweeps
    pub reap_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl CacheConfig {
    /// Creates a config whose reap interval equals the TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            reap_interval: ttl,
        }
    }

    /// Sets the TTL, leaving the reap interval untouched.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets the reap interval.
    ///
    /// This also bounds staleness: an expired entry can be read for up to one
    /// interval before it is swept.
    pub fn with_reap_interval(mut self, interval: Duration) -> Self {
        self.reap_interval = interval;
        self
    }

    /// Rejects zero durations. A zero TTL would expire every entry on
    /// insertion and a zero interval cannot drive a ticker.
    pub fn validate(&self) -> Result<()> {
        if self.ttl.is_zero() {
            return Err(PokedexError::Config("cache TTL must be greater than zero".into()));
        }
        if self.reap_interval.is_zero() {
            return Err(PokedexError::Config(
                "reap interval must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
