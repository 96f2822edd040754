//! Static seed data for the training catalog.
//!
//! The document is embedded at compile time; callers receive a validated
//! [`Catalog`] and inject it wherever it is presented.

use super::aggregate::{Catalog, CatalogError, Module};

const BUNDLED_SEED: &str = include_str!("seed.json");

/// Parse a JSON array of modules into a validated catalog
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let modules: Vec<Module> = serde_json::from_str(json)?;
    Catalog::new(modules)
}

/// Catalog shipped with the application
pub fn bundled_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(BUNDLED_SEED)
}
