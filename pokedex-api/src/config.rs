//! Client configuration.

use serde::{Deserialize, Serialize};

use pokedex_cache::CacheConfig;
use pokedex_core::constants::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use pokedex_core::error::{PokedexError, Result};

/// PokeAPI client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root, e.g. "https://pokeapi.co/api/v2"
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Response cache settings
    pub cache: CacheConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            cache: CacheConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Points the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replaces the cache settings.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Rejects a zero request timeout and invalid cache settings.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(PokedexError::Config(
                "request timeout must be greater than zero".into(),
            ));
        }
        self.cache.validate()
    }
}
