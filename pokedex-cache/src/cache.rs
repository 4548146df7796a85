//! Store plus owned reaper: the handle collaborators hold.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::debug;

use pokedex_core::error::Result;
use pokedex_core::traits::CacheStore;

use crate::config::CacheConfig;
use crate::reaper::Reaper;
use crate::store::{CacheStats, TtlStore};

/// Time-expiring cache with a background reaper.
///
/// Construct one per component that needs memoized fetches and share it by
/// reference (`&Cache` or `Arc<Cache>`). Dropping the cache stops its
/// reaper; call [`Cache::shutdown`] to also wait for the task to finish.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use pokedex_cache::{Cache, CacheConfig};
///
/// #[tokio::main]
/// async fn main() -> pokedex_core::Result<()> {
///     let config = CacheConfig::new(Duration::from_secs(300))
///         .with_reap_interval(Duration::from_secs(30));
///     let cache = Cache::with_config(config)?;
///
///     cache.put("key", &b"value"[..]);
///     assert_eq!(cache.get("key").as_deref(), Some(&b"value"[..]));
///
///     cache.shutdown().await;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Cache {
    store: Arc<TtlStore>,
    reaper: Reaper,
    config: CacheConfig,
}

impl Cache {
    /// Creates a cache whose entries live for `ttl`, reaped every `ttl`.
    ///
    /// # Errors
    ///
    /// Fails for a zero `ttl` or when called outside a Tokio runtime.
    pub fn new(ttl: Duration) -> Result<Self> {
        Self::with_config(CacheConfig::new(ttl))
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        let store = Arc::new(TtlStore::new(config.ttl));
        let reaper = Reaper::spawn(Arc::downgrade(&store), config.reap_interval)?;
        debug!(ttl = ?config.ttl, reap_interval = ?config.reap_interval, "Cache created");

        Ok(Self {
            store,
            reaper,
            config,
        })
    }

    /// Inserts or replaces the entry for `key`.
    pub fn put(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        self.store.put(key, payload);
    }

    /// Returns the payload for `key` if present.
    ///
    /// Entries past their TTL remain visible until the next sweep.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.store.get(key)
    }

    /// Removes a cached entry. Returns whether it was present.
    pub fn remove(&self, key: &str) -> bool {
        self.store.delete(key)
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Sweeps expired entries immediately, outside the reaper's schedule.
    pub fn reap_now(&self) -> usize {
        self.store.sweep()
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    /// Entry time-to-live.
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// Time between reaper sweeps.
    pub fn reap_interval(&self) -> Duration {
        self.reaper.interval()
    }

    /// Returns the configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &TtlStore {
        &self.store
    }

    /// Stops the reaper without waiting. Entries are no longer expired.
    pub fn stop(&self) {
        self.reaper.stop();
    }

    /// Stops the reaper and waits for its task to exit.
    pub async fn shutdown(&self) {
        self.reaper.shutdown().await;
        debug!(entries = self.len(), "Cache shut down");
    }

    /// True while the reaper task is alive.
    pub fn is_reaping(&self) -> bool {
        self.reaper.is_running()
    }
}

impl CacheStore for Cache {
    fn get(&self, key: &str) -> Option<Bytes> {
        Cache::get(self, key)
    }

    fn put(&self, key: &str, payload: Bytes) {
        Cache::put(self, key, payload)
    }

    fn delete(&self, key: &str) -> bool {
        self.remove(key)
    }
}
