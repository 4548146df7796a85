//! REPL state and command handlers.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Context, Result};
use colored::*;
use rand::Rng;
use tracing::debug;

use pokedex_api::PokeApiClient;
use pokedex_core::constants::CATCH_ROLL_MAX;
use pokedex_core::types::{LocationAreaPage, Pokemon};

use crate::command::{Command, COMMANDS};

/// Whether the REPL keeps reading after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Which location-area page to request next.
#[derive(Debug, PartialEq, Eq)]
pub enum PageRequest<'a> {
    First,
    Url(&'a str),
}

/// Position in the location-area listing.
#[derive(Debug, Default)]
pub struct PageCursor {
    loaded: bool,
    next: Option<String>,
    previous: Option<String>,
}

impl PageCursor {
    /// Page `map` should show, or `None` when already on the last page.
    pub fn forward(&self) -> Option<PageRequest<'_>> {
        match (&self.next, self.loaded) {
            (Some(url), _) => Some(PageRequest::Url(url)),
            (None, false) => Some(PageRequest::First),
            (None, true) => None,
        }
    }

    /// Page `mapb` should show, or `None` when already on the first page.
    pub fn back(&self) -> Option<PageRequest<'_>> {
        self.previous.as_deref().map(PageRequest::Url)
    }

    /// Records the page just shown.
    pub fn advance(&mut self, page: &LocationAreaPage) {
        self.loaded = true;
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }
}

/// A catch succeeds when the roll beats the Pokemon's base experience.
pub fn is_caught(base_experience: u32, roll: u32) -> bool {
    base_experience < roll
}

type Roller = Box<dyn FnMut() -> u32 + Send>;

/// One interactive session: API client, map position, caught Pokemon.
pub struct Session {
    client: PokeApiClient,
    cursor: PageCursor,
    pokedex: BTreeMap<String, Pokemon>,
    roll: Roller,
}

impl Session {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            cursor: PageCursor::default(),
            pokedex: BTreeMap::new(),
            roll: Box::new(|| rand::thread_rng().gen_range(0..CATCH_ROLL_MAX)),
        }
    }

    /// Replaces the catch roll source.
    #[cfg(test)]
    pub fn with_roll(mut self, roll: impl FnMut() -> u32 + Send + 'static) -> Self {
        self.roll = Box::new(roll);
        self
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub async fn run(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        debug!(?command, "Running command");
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => return Ok(Flow::Exit),
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }
        Ok(Flow::Continue)
    }

    /// Stops background work owned by the session.
    pub async fn shutdown(&self) {
        self.client.shutdown().await;
    }

    fn help(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "\n{}", "Welcome to the Pokedex!".cyan().bold())?;
        writeln!(out, "Usage:\n")?;
        for (name, description) in COMMANDS {
            writeln!(out, "{}: {}", name.bold(), description)?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn map(&mut self, out: &mut impl Write) -> Result<()> {
        let page = match self.cursor.forward() {
            None => {
                writeln!(out, "Cannot go forward any further")?;
                return Ok(());
            }
            Some(request) => self.fetch_page(request).await?,
        };
        self.show_page(page, out)
    }

    async fn map_back(&mut self, out: &mut impl Write) -> Result<()> {
        let page = match self.cursor.back() {
            None => {
                writeln!(out, "Cannot go back any further")?;
                return Ok(());
            }
            Some(request) => self.fetch_page(request).await?,
        };
        self.show_page(page, out)
    }

    async fn fetch_page(&self, request: PageRequest<'_>) -> Result<LocationAreaPage> {
        let url = match request {
            PageRequest::First => None,
            PageRequest::Url(url) => Some(url),
        };
        self.client
            .location_areas(url)
            .await
            .context("unable to fetch location areas")
    }

    fn show_page(&mut self, page: LocationAreaPage, out: &mut impl Write) -> Result<()> {
        self.cursor.advance(&page);
        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore(&self, area: &str, out: &mut impl Write) -> Result<()> {
        let location = self
            .client
            .location_area(area)
            .await
            .with_context(|| format!("unable to fetch location {area}"))?;

        writeln!(out, "Exploring {}...", area.cyan())?;
        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {name}")?;
        }
        Ok(())
    }

    async fn catch(&mut self, name: &str, out: &mut impl Write) -> Result<()> {
        let pokemon = self
            .client
            .pokemon(name)
            .await
            .with_context(|| format!("unable to fetch pokemon {name}"))?;

        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

        let roll = (self.roll)();
        if is_caught(pokemon.base_experience, roll) {
            writeln!(out, "{}", format!("{} was caught!", pokemon.name).green())?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{}", format!("{} escaped!", pokemon.name).yellow())?;
        }
        Ok(())
    }

    fn inspect(&self, name: &str, out: &mut impl Write) -> Result<()> {
        let Some(pokemon) = self.pokedex.get(name) else {
            writeln!(out, "you have not caught that pokemon")?;
            return Ok(());
        };

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  - {}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for slot in &pokemon.types {
            writeln!(out, "  - {}", slot.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.keys() {
            writeln!(out, "  - {name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use pokedex_api::ApiConfig;
    use pokedex_cache::CacheConfig;
    use pokedex_core::types::NamedResource;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page(next: Option<&str>, previous: Option<&str>) -> LocationAreaPage {
        LocationAreaPage {
            count: 1,
            next: next.map(String::from),
            previous: previous.map(String::from),
            results: vec![NamedResource {
                name: "area".into(),
                url: "u".into(),
            }],
        }
    }

    fn session_for(server: &MockServer) -> Session {
        let config = ApiConfig::default()
            .with_base_url(server.uri())
            .with_cache(CacheConfig::new(Duration::from_secs(60)));
        Session::new(PokeApiClient::with_config(config).unwrap())
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cursor_walk() {
        let mut cursor = PageCursor::default();
        assert_eq!(cursor.forward(), Some(PageRequest::First));
        assert_eq!(cursor.back(), None);

        cursor.advance(&page(Some("p2"), None));
        assert_eq!(cursor.forward(), Some(PageRequest::Url("p2")));
        assert_eq!(cursor.back(), None);

        cursor.advance(&page(None, Some("p1")));
        assert_eq!(cursor.forward(), None);
        assert_eq!(cursor.back(), Some(PageRequest::Url("p1")));
    }

    #[test]
    fn test_catch_rule() {
        assert!(is_caught(50, 51));
        assert!(!is_caught(50, 50));
        assert!(!is_caught(250, CATCH_ROLL_MAX - 1));
    }

    #[tokio::test]
    async fn test_map_then_mapb() {
        let server = MockServer::start().await;
        let second = format!("{}/location-area/?offset=20&limit=20", server.uri());
        let first = format!("{}/location-area/?offset=0&limit=20", server.uri());

        Mock::given(method("GET"))
            .and(path("/location-area/"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 40, "next": second, "previous": null,
                "results": [{"name": "canalave-city-area", "url": "u"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/location-area/"))
            .and(query_param("offset", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 40, "next": null, "previous": first,
                "results": [{"name": "eterna-city-area", "url": "u"}]
            })))
            .mount(&server)
            .await;

        let mut session = session_for(&server);

        let mut out = Vec::new();
        session.run(Command::MapBack, &mut out).await.unwrap();
        assert!(text(out).contains("Cannot go back any further"));

        let mut out = Vec::new();
        session.run(Command::Map, &mut out).await.unwrap();
        assert!(text(out).contains("canalave-city-area"));

        let mut out = Vec::new();
        session.run(Command::Map, &mut out).await.unwrap();
        assert!(text(out).contains("eterna-city-area"));

        let mut out = Vec::new();
        session.run(Command::Map, &mut out).await.unwrap();
        assert!(text(out).contains("Cannot go forward any further"));

        let mut out = Vec::new();
        session.run(Command::MapBack, &mut out).await.unwrap();
        assert!(text(out).contains("canalave-city-area"));

        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_catch_inspect_pokedex() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/pidgey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "pidgey", "base_experience": 50, "height": 3, "weight": 18,
                "stats": [{"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
                "types": [{"slot": 1, "type": {"name": "normal", "url": "u"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut session = session_for(&server).with_roll(|| CATCH_ROLL_MAX - 1);

        let mut out = Vec::new();
        session.run(Command::Inspect("pidgey".into()), &mut out).await.unwrap();
        assert!(text(out).contains("you have not caught that pokemon"));

        let mut out = Vec::new();
        session.run(Command::Catch("pidgey".into()), &mut out).await.unwrap();
        assert!(text(out).contains("pidgey was caught!"));

        let mut out = Vec::new();
        session.run(Command::Inspect("pidgey".into()), &mut out).await.unwrap();
        let shown = text(out);
        assert!(shown.contains("Height: 3"));
        assert!(shown.contains("  - hp: 40"));
        assert!(shown.contains("  - normal"));

        let mut out = Vec::new();
        session.run(Command::Pokedex, &mut out).await.unwrap();
        assert!(text(out).contains("  - pidgey"));

        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_escape_not_recorded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/mewtwo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "mewtwo", "base_experience": 340, "height": 20, "weight": 1220,
                "stats": [], "types": []
            })))
            .mount(&server)
            .await;

        let mut session = session_for(&server).with_roll(|| 0);

        let mut out = Vec::new();
        session.run(Command::Catch("mewtwo".into()), &mut out).await.unwrap();
        assert!(text(out).contains("mewtwo escaped!"));

        let mut out = Vec::new();
        session.run(Command::Inspect("mewtwo".into()), &mut out).await.unwrap();
        assert!(text(out).contains("you have not caught that pokemon"));

        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_null_base_experience_is_catchable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon/koraidon"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "koraidon", "base_experience": null, "height": 25, "weight": 3030,
                "stats": [], "types": []
            })))
            .mount(&server)
            .await;

        let mut session = session_for(&server).with_roll(|| 1);

        let mut out = Vec::new();
        session.run(Command::Catch("koraidon".into()), &mut out).await.unwrap();
        assert!(text(out).contains("koraidon was caught!"));

        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_explore_error_has_context() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/location-area/nowhere"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let mut session = session_for(&server);
        let mut out = Vec::new();
        let err = session
            .run(Command::Explore("nowhere".into()), &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("unable to fetch location nowhere"));
        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_exit() {
        let server = MockServer::start().await;
        let mut session = session_for(&server);
        let mut out = Vec::new();
        assert_eq!(session.run(Command::Exit, &mut out).await.unwrap(), Flow::Exit);
        session.shutdown().await;
    }
}
