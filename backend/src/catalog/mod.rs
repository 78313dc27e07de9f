//! Catalog provider: the static lists of named objects fed to the transform.
//!
//! The provider is the seam between the assembler and wherever the catalog
//! lives. [`StaticCatalog`] serves the compiled-in data; tests plug in their
//! own providers to exercise fallback and failure paths.

pub mod constellations;
pub mod stars;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CelestialObject;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog could not be loaded at all.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Named group of objects with display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constellation {
    pub name: String,
    pub objects: Vec<CelestialObject>,
    pub highlighted: bool,
    pub color: String,
}

/// Source of catalog objects.
///
/// Implementations must be deterministic: the same call returns the same
/// objects in the same order, duplicates included.
pub trait CatalogProvider: Send + Sync {
    /// All listed objects, in declaration order.
    fn list_objects(&self) -> CatalogResult<Vec<CelestialObject>>;

    /// Constellation figures keyed by name.
    fn list_constellations(&self) -> CatalogResult<BTreeMap<String, Constellation>>;
}

/// Compiled-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_objects(&self) -> CatalogResult<Vec<CelestialObject>> {
        Ok(stars::bright_stars())
    }

    fn list_constellations(&self) -> CatalogResult<BTreeMap<String, Constellation>> {
        Ok(constellations::highlighted_constellations()
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_catalog_objects_are_restartable() {
        let catalog = StaticCatalog::new();
        let first = catalog.list_objects().unwrap();
        let second = catalog.list_objects().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_static_catalog_constellation_keys() {
        let catalog = StaticCatalog::new();
        let figures = catalog.list_constellations().unwrap();
        let keys: Vec<&str> = figures.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Leo", "Sagittarius"]);
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Unavailable("disk on fire".to_string());
        assert_eq!(err.to_string(), "Catalog unavailable: disk on fire");
    }
}
