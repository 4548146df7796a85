//! The key → entry map shared by callers and the reaper.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use bytes::Bytes;
use parking_lot::Mutex;

use pokedex_core::traits::CacheStore;

use crate::entry::Entry;

/// Thread-safe TTL store.
///
/// The whole map sits behind a single exclusive lock, so `put`, `get` and a
/// reaper sweep never observe each other half-done. Reads return entries
/// regardless of age; removing expired entries is [`TtlStore::sweep`]'s job.
#[derive(Debug)]
pub struct TtlStore {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl TtlStore {
    /// Creates an empty store whose entries expire `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the TTL shared by every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub fn put(&self, key: impl Into<String>, payload: impl Into<Bytes>) {
        let entry = Entry::new(payload.into());
        self.entries.lock().insert(key.into(), entry);
    }

    /// Returns the payload for `key` if present, even if it is past its TTL.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.lock().get(key).map(|e| e.payload().clone())
    }

    /// Removes `key`. Returns whether it was present.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.lock().remove(key).is_some()
    }

    /// Every key currently stored, with its age.
    pub fn snapshot(&self) -> Vec<(String, Duration)> {
        let entries = self.entries.lock();
        let now = Instant::now();
        entries
            .iter()
            .map(|(k, e)| (k.clone(), e.age_at(now)))
            .collect()
    }

    /// Removes every entry whose age has reached the TTL.
    ///
    /// Takes the lock once, reads the clock under it, and returns the number
    /// of entries removed.
    pub fn sweep(&self) -> usize {
        let mut entries = self.entries.lock();
        let now = Instant::now();
        Self::sweep_locked(&mut entries, now, self.ttl)
    }

    /// Like [`TtlStore::sweep`], but measures ages against `now`.
    pub fn sweep_at(&self, now: Instant) -> usize {
        let mut entries = self.entries.lock();
        Self::sweep_locked(&mut entries, now, self.ttl)
    }

    fn sweep_locked(entries: &mut HashMap<String, Entry>, now: Instant, ttl: Duration) -> usize {
        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, e)| e.is_expired_at(now, ttl))
            .map(|(k, _)| k.clone())
            .collect();

        for key in &expired {
            entries.remove(key);
        }
        expired.len()
    }

    /// Clears all entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Returns the number of entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns store statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        let now = Instant::now();
        let expired = entries
            .values()
            .filter(|e| e.is_expired_at(now, self.ttl))
            .count();

        CacheStats {
            total_entries: entries.len(),
            expired_entries: expired,
            live_entries: entries.len() - expired,
        }
    }
}

impl CacheStore for TtlStore {
    fn get(&self, key: &str) -> Option<Bytes> {
        TtlStore::get(self, key)
    }

    fn put(&self, key: &str, payload: Bytes) {
        TtlStore::put(self, key, payload)
    }

    fn delete(&self, key: &str) -> bool {
        TtlStore::delete(self, key)
    }
}

/// Store statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Total entries (including expired)
    pub total_entries: usize,
    /// Entries past their TTL awaiting the next sweep
    pub expired_entries: usize,
    /// Entries still within their TTL
    pub live_entries: usize,
}
