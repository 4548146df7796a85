//! Location area types.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// One page of `GET /location-area`.
///
/// `next` and `previous` are absolute URLs of the neighbouring pages, `None`
/// at either end of the listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the next page
    pub next: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// `GET /location-area/{name}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    /// Area name
    #[serde(default)]
    pub name: String,
    /// Pokemon that can be encountered here
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Names of every Pokemon encountered in the area, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters.iter().map(|e| e.pokemon.name.as_str())
    }
}

/// An encounter entry inside a [`LocationArea`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    /// The Pokemon encountered
    pub pokemon: NamedResource,
}
