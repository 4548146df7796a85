//! Constants for Pokedex.
//!
//! API endpoints, paging, and cache timing defaults.

use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════════
// POKEAPI
// ═══════════════════════════════════════════════════════════════════════════════

/// Base URL of the public PokeAPI.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Number of location areas per page.
pub const LOCATION_AREA_PAGE_LIMIT: usize = 20;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// Default time-to-live for cached responses (5 minutes).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

// ═══════════════════════════════════════════════════════════════════════════════
// GAMEPLAY
// ═══════════════════════════════════════════════════════════════════════════════

/// Upper bound (exclusive) of a catch roll.
/// A Pokemon is caught when its base experience is below the roll.
pub const CATCH_ROLL_MAX: u32 = 200;
