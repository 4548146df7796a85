//! Common traits for Pokedex.
//!
//! These traits are the seams between the cache and the code that fills it,
//! so a different store layout or a fake network can be dropped in.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE STORE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Key-value capability behind the fetch memoization boundary.
///
/// Implementations must be safe to share across threads without external
/// locking. None of these operations can fail.
pub trait CacheStore: Send + Sync {
    /// Returns the payload stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Bytes>;

    /// Inserts or replaces the entry for `key`.
    fn put(&self, key: &str, payload: Bytes);

    /// Removes `key`. Returns whether it was present.
    fn delete(&self, key: &str) -> bool;
}

// ═══════════════════════════════════════════════════════════════════════════════
// FETCHER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Source of payloads for keys that are not cached.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the payload for `key` (for HTTP fetchers, the request URL).
    async fn fetch(&self, key: &str) -> Result<Bytes>;
}
