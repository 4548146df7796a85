//! # Pokedex Core
//!
//! Core types, errors, and traits shared by every Pokedex crate.
//!
//! - **Types**: PokeAPI response models (location areas, Pokemon)
//! - **Errors**: One error enum for the whole workspace
//! - **Constants**: API endpoints and cache defaults
//! - **Traits**: The cache and fetch seams that collaborators program against
//!
//! ## Example
//!
//! ```rust
//! use pokedex_core::{LocationAreaPage, PokedexError};
//!
//! let page: LocationAreaPage = serde_json::from_str(
//!     r#"{"count":1,"next":null,"previous":null,"results":[{"name":"canalave-city-area","url":"u"}]}"#,
//! ).unwrap();
//! assert_eq!(page.results[0].name, "canalave-city-area");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{PokedexError, Result};
pub use traits::*;
pub use types::*;
