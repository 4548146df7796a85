//! reqwest-backed [`Fetcher`].

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, instrument};

use pokedex_core::error::{PokedexError, Result};
use pokedex_core::traits::Fetcher;

/// Fetches raw response bodies over HTTP.
///
/// Any status outside 2xx becomes `PokedexError::HttpStatus` carrying the
/// body text, so callers can show what the server said.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    http_client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PokedexError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<Bytes> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| PokedexError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PokedexError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(PokedexError::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!(bytes = body.len(), "Fetched");
        Ok(body)
    }
}
