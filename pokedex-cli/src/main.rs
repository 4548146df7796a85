//! Pokedex CLI
//!
//! Interactive Pokedex backed by the PokeAPI. Responses are cached in memory
//! and expire after a configurable TTL.

mod command;
mod session;

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pokedex_api::{ApiConfig, PokeApiClient};
use pokedex_cache::CacheConfig;
use pokedex_core::constants::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};

use crate::command::Command;
use crate::session::{Flow, Session};

/// Pokedex - explore the Pokemon world from your terminal
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// PokeAPI root URL
    #[arg(long, env = "POKEAPI_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Seconds a cached response stays valid
    #[arg(long, env = "POKEDEX_CACHE_TTL_SECS", default_value = "300")]
    cache_ttl_secs: u64,

    /// Seconds between cache sweeps (defaults to the TTL)
    #[arg(long)]
    reap_interval_secs: Option<u64>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    timeout_secs: u64,
}

impl Cli {
    fn api_config(&self) -> ApiConfig {
        let ttl = Duration::from_secs(self.cache_ttl_secs);
        let reap_interval = self.reap_interval_secs.map_or(ttl, Duration::from_secs);

        ApiConfig::default()
            .with_base_url(&self.base_url)
            .with_timeout_seconds(self.timeout_secs)
            .with_cache(CacheConfig::new(ttl).with_reap_interval(reap_interval))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "pokedex=debug,info"
    } else {
        "pokedex=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = PokeApiClient::with_config(cli.api_config())
        .context("failed to start the PokeAPI client")?;
    info!(
        base_url = %cli.base_url,
        ttl = ?client.cache().ttl(),
        reap_interval = ?client.cache().reap_interval(),
        "Pokedex ready"
    );

    let mut session = Session::new(client);
    let stdin = BufReader::new(tokio::io::stdin());
    let result = repl(&mut session, stdin, &mut std::io::stdout()).await;
    session.shutdown().await;
    result
}

async fn repl<R, W>(session: &mut Session, mut input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        write!(out, "Pokedex > ")?;
        out.flush()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .await
            .context("failed to read input")?;
        if read == 0 {
            // EOF
            writeln!(out)?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e.to_string().yellow())?;
                continue;
            }
        };

        match session.run(command, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(e) => {
                warn!(error = %e, cached = session.client().cache().len(), "Command failed");
                writeln!(out, "{} {:#}", "error:".red().bold(), e)?;
            }
        }
    }
}
