//! Typed PokeAPI calls over the memoized fetcher.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use pokedex_cache::{fetch_with_cache, Cache};
use pokedex_core::constants::LOCATION_AREA_PAGE_LIMIT;
use pokedex_core::error::{PokedexError, Result};
use pokedex_core::types::{LocationArea, LocationAreaPage, Pokemon};

use crate::config::ApiConfig;
use crate::fetcher::HttpFetcher;

/// PokeAPI client.
///
/// Owns its response cache; the cache's reaper stops when the client is
/// dropped or [`PokeApiClient::shutdown`] is awaited.
///
/// ```rust,ignore
/// let client = PokeApiClient::new()?;
/// let page = client.location_areas(None).await?;
/// let next = client.location_areas(page.next.as_deref()).await?;
/// ```
#[derive(Debug)]
pub struct PokeApiClient {
    base_url: Url,
    fetcher: HttpFetcher,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client against the public PokeAPI with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a client with custom configuration.
    ///
    /// Must be called inside a Tokio runtime, which hosts the cache reaper.
    pub fn with_config(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| PokedexError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(PokedexError::InvalidUrl(config.base_url));
        }

        let fetcher = HttpFetcher::new(Duration::from_secs(config.timeout_seconds))?;
        let cache = Cache::with_config(config.cache)?;

        Ok(Self {
            base_url,
            fetcher,
            cache,
        })
    }

    /// Returns the response cache.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Fetches a page of location areas.
    ///
    /// `None` requests the first page; otherwise pass a `next`/`previous`
    /// URL from an earlier page.
    #[instrument(skip(self))]
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => Url::parse(url)
                .map_err(|e| PokedexError::InvalidUrl(format!("{url}: {e}")))?,
            None => self.first_page_url()?,
        };
        self.get_json(url.as_str()).await
    }

    /// Fetches one location area by name or id.
    #[instrument(skip(self))]
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let name = normalize(name)?;
        let url = self.endpoint(&["location-area", name.as_str()])?;
        self.get_json(url.as_str()).await
    }

    /// Fetches one Pokemon by name or id.
    #[instrument(skip(self))]
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let name = normalize(name)?;
        let url = self.endpoint(&["pokemon", name.as_str()])?;
        self.get_json(url.as_str()).await
    }

    /// Stops the cache reaper and waits for it.
    pub async fn shutdown(&self) {
        self.cache.shutdown().await;
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = fetch_with_cache(&self.cache, &self.fetcher, url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn first_page_url(&self) -> Result<Url> {
        // Trailing empty segment keeps the slash: /location-area/?offset=...
        let mut url = self.endpoint(&["location-area", ""])?;
        url.query_pairs_mut()
            .append_pair("offset", "0")
            .append_pair("limit", &LOCATION_AREA_PAGE_LIMIT.to_string());
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PokedexError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn normalize(name: &str) -> Result<String> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return Err(PokedexError::InvalidInput("name cannot be empty".into()));
    }
    Ok(name)
}
