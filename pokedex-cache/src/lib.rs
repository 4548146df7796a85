//! # Pokedex Cache
//!
//! Thread-safe in-memory cache where every entry expires a fixed duration
//! after insertion.
//!
//! - [`TtlStore`]: the key → (payload, creation time) map behind one lock
//! - [`Reaper`]: background task that periodically purges expired entries
//! - [`Cache`]: a store plus the reaper it owns; stopping or dropping the
//!   cache stops the reaper
//! - [`fetch_with_cache`]: read-through helper for network collaborators
//!
//! Reads do not filter by age. An entry stays visible until the reaper's
//! next sweep, so a value may be served up to one reap interval past its TTL.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use pokedex_cache::Cache;
//!
//! #[tokio::main]
//! async fn main() -> pokedex_core::Result<()> {
//!     let cache = Cache::new(Duration::from_secs(300))?;
//!     cache.put("https://pokeapi.co/api/v2/pokemon/pikachu", &b"{}"[..]);
//!     assert!(cache.get("https://pokeapi.co/api/v2/pokemon/pikachu").is_some());
//!     cache.shutdown().await;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;
mod config;
mod entry;
mod memo;
mod reaper;
mod store;

pub use cache::Cache;
pub use config::CacheConfig;
pub use entry::Entry;
pub use memo::fetch_with_cache;
pub use reaper::Reaper;
pub use store::{CacheStats, TtlStore};
