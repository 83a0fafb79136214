//! Catalog Loading
//!
//! The menu ships as JSON embedded in the crate. Loading validates the
//! invariants the store relies on (unique ids, sane prices, an "All" filter).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::{MenuItem, StatEntry};
use crate::store::ALL_CATEGORY;

const BUILTIN_SITE: &str = include_str!("../data/site.json");

/// Errors raised while loading a catalog document
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate menu item id {0}")]
    DuplicateId(u32),
    #[error("menu item {id} has invalid price {price}")]
    InvalidPrice { id: u32, price: f64 },
    #[error("category list is missing \"All\"")]
    MissingAllCategory,
}

/// Menu data set: filter categories, items, and stats counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<String>,
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

impl Catalog {
    /// Parse and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        log::debug!(
            "catalog loaded: {} items, {} categories",
            catalog.items.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// The menu bundled with the site
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_SITE)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if !self.categories.iter().any(|c| c == ALL_CATEGORY) {
            return Err(CatalogError::MissingAllCategory);
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CatalogError::InvalidPrice { id: item.id, price: item.price });
            }
        }
        Ok(())
    }
}
