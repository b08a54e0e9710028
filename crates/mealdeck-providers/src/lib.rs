//! Client adapter for TheMealDB recipe API.
//!
//! The API answers every endpoint with `{"meals": [...]}`; a missing or null
//! `meals` field means "nothing matched" and decodes to an empty collection.

mod client;
mod endpoint;
mod error;
mod source;
mod wire;

pub use client::HttpClient;
pub use endpoint::{DEFAULT_BASE_URL, Endpoint};
pub use error::{Error, Result};
pub use source::{HttpRecipeSource, RecipeSource};
pub use wire::{parse_areas, parse_lookup, parse_meals};
