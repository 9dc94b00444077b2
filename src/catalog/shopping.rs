use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{ItemPrices, Store};

const BUILTIN_SHOPPING: &str = include_str!("../../data/shopping_catalog.json");

#[derive(Debug, Serialize, Deserialize)]
struct ShoppingCatalogFile {
    stores: Vec<Store>,
    items: Vec<ItemPrices>,
}

/// Ordered price entries used for first-match lookup by item name.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    entries: Vec<ItemPrices>,
}

impl PriceTable {
    /// Build a table, normalizing keys and recomputing lowest-price flags.
    pub fn new(entries: Vec<ItemPrices>) -> Result<Self> {
        let mut entries = entries;
        for entry in &mut entries {
            if entry.prices.is_empty() {
                return Err(PlannerError::Catalog(format!(
                    "price entry '{}' has no store prices",
                    entry.item_name
                )));
            }
            if entry.prices.iter().any(|p| !(p.price >= 0.0)) {
                return Err(PlannerError::Catalog(format!(
                    "price entry '{}' has a negative price",
                    entry.item_name
                )));
            }

            entry.normalized_name = entry.normalized_name.trim().to_lowercase();
            // A blank key would match every item name
            if entry.normalized_name.is_empty() {
                return Err(PlannerError::Catalog(format!(
                    "price entry '{}' has an empty matching key",
                    entry.item_name
                )));
            }

            let best = entry.best_price();
            let mut flagged = false;
            for price in &mut entry.prices {
                price.is_lowest_price = !flagged && price.price == best;
                flagged |= price.is_lowest_price;
            }
        }
        Ok(Self { entries })
    }

    /// First entry whose key is a substring of the item name or vice versa.
    ///
    /// Entry order decides between several matches, so "oil" listed before
    /// "olive oil" also wins for "olive oil". Runs in O(entries) per lookup.
    pub fn find(&self, item_name: &str) -> Option<&ItemPrices> {
        self.find_key(&item_name.trim().to_lowercase())
    }

    /// [`find`](Self::find) for a name that is already trimmed and lowercased.
    pub fn find_key(&self, key: &str) -> Option<&ItemPrices> {
        if key.is_empty() {
            return None;
        }
        self.entries.iter().find(|entry| entry.matches(key))
    }

    pub fn entries(&self) -> &[ItemPrices] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Store directory plus the price table.
#[derive(Debug, Clone)]
pub struct ShoppingCatalog {
    pub stores: Vec<Store>,
    pub prices: PriceTable,
}

impl ShoppingCatalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SHOPPING)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: ShoppingCatalogFile = serde_json::from_str(json)?;

        if let Some(store) = file.stores.iter().find(|s| !(s.distance_km >= 0.0)) {
            return Err(PlannerError::Catalog(format!(
                "store '{}' has a negative distance",
                store.name
            )));
        }

        Ok(Self {
            stores: file.stores,
            prices: PriceTable::new(file.items)?,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content)?;
        debug!(
            path = %path.as_ref().display(),
            stores = catalog.stores.len(),
            items = catalog.prices.len(),
            "loaded shopping catalog"
        );
        Ok(catalog)
    }

    pub fn load_or_builtin<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }
}
