//! PokeAPI response types.
//!
//! Only the fields the Pokedex reads are modelled; serde ignores the rest.
//!
//! - [`LocationAreaPage`]: One page of the location-area listing
//! - [`LocationArea`]: A single area and the Pokemon encountered there
//! - [`Pokemon`]: Species details used by `catch` and `inspect`

mod location;
mod pokemon;

pub use location::*;
pub use pokemon::*;

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference, the PokeAPI's generic link shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g. "pikachu")
    pub name: String,
    /// Absolute URL of the resource
    pub url: String,
}
