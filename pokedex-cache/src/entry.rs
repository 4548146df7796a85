use std::time::{Duration, Instant};

use bytes::Bytes;

/// A cached payload and the moment it was inserted.
///
/// Entries are never mutated; a `put` on an existing key replaces the whole
/// entry, timestamp included.
#[derive(Debug, Clone)]
pub struct Entry {
    payload: Bytes,
    created_at: Instant,
}

impl Entry {
    /// Creates an entry stamped with the current time.
    pub fn new(payload: Bytes) -> Self {
        Self::with_created_at(payload, Instant::now())
    }

    pub(crate) fn with_created_at(payload: Bytes, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    /// Returns the stored payload.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Returns the insertion time.
    pub fn inserted_at(&self) -> Instant {
        self.created_at
    }

    /// Age of the entry as seen at `now`. Zero if `now` predates insertion.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// True once the entry's age has reached `ttl`.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) >= ttl
    }
}
