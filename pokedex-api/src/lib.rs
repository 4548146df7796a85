//! PokeAPI client for the Pokedex.
//!
//! Every GET goes through a [`pokedex_cache::Cache`] keyed by the full
//! request URL, so paging back and forth or re-inspecting a Pokemon does not
//! hit the network again until the entry is reaped.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;
mod config;
mod fetcher;

pub use client::PokeApiClient;
pub use config::ApiConfig;
pub use fetcher::HttpFetcher;
