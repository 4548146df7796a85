//! Pokemon species types.

use serde::{Deserialize, Deserializer, Serialize};

use super::NamedResource;

/// `GET /pokemon/{name}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Lowercase species name
    pub name: String,
    /// Experience gained for defeating it; also drives catch difficulty.
    /// Some newer species report `null`, read as 0.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base stats
    pub stats: Vec<PokemonStat>,
    /// Type slots
    pub types: Vec<PokemonType>,
}

/// One base stat of a [`Pokemon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    /// Base value
    pub base_stat: u32,
    /// Effort points awarded
    pub effort: u32,
    /// Which stat this is (hp, attack, ...)
    pub stat: NamedResource,
}

/// One type slot of a [`Pokemon`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    /// Slot order
    pub slot: u32,
    /// The type itself
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}
