//! Read-through memoization of fetches.

use bytes::Bytes;
use tracing::debug;

use pokedex_core::error::Result;
use pokedex_core::traits::{CacheStore, Fetcher};

/// Returns the cached payload for `key`, or fetches, caches, and returns it.
///
/// Fetch errors propagate and leave the cache untouched. Concurrent misses on
/// the same key are not coalesced: every caller that misses fetches on its
/// own and the last `put` wins.
pub async fn fetch_with_cache<S, F>(store: &S, fetcher: &F, key: &str) -> Result<Bytes>
where
    S: CacheStore + ?Sized,
    F: Fetcher + ?Sized,
{
    if let Some(payload) = store.get(key) {
        debug!(key, "Cache hit");
        return Ok(payload);
    }

    debug!(key, "Cache miss, fetching");
    let payload = fetcher.fetch(key).await?;
    store.put(key, payload.clone());
    Ok(payload)
}
