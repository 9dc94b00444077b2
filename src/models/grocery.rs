use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry on the user's grocery list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: String,
    pub name: String,

    /// Free-text quantity, e.g. "2 kg".
    pub amount: String,

    pub category: String,
    pub added_date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_recipe: Option<String>,

    #[serde(default)]
    pub completed: bool,
}

impl GroceryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount: amount.into(),
            category: "Pantry".to_string(),
            added_date: Utc::now(),
            from_recipe: None,
            completed: false,
        }
    }

    /// Trimmed lowercase name used for price matching.
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// A store's price for one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePrice {
    pub store: String,
    pub price: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    pub unit: String,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    /// Distance from the reference point in km.
    #[serde(default)]
    pub distance_km: f64,

    /// Recomputed when the price table is built; input values are ignored.
    #[serde(default)]
    pub is_lowest_price: bool,
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_in_stock() -> bool {
    true
}

/// Price comparison data for one item across stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPrices {
    pub item_name: String,

    /// Lowercase matching key, e.g. "chicken breast".
    pub normalized_name: String,

    pub category: String,
    pub prices: Vec<StorePrice>,
}

impl ItemPrices {
    /// Lowest price across stores.
    pub fn best_price(&self) -> f64 {
        self.prices
            .iter()
            .map(|p| p.price)
            .fold(f64::INFINITY, f64::min)
    }

    /// Mean price across stores.
    pub fn average_price(&self) -> f64 {
        if self.prices.is_empty() {
            return 0.0;
        }
        self.prices.iter().map(|p| p.price).sum::<f64>() / self.prices.len() as f64
    }

    /// First store offering the lowest price.
    pub fn best_store(&self) -> Option<&StorePrice> {
        let best = self.best_price();
        self.prices.iter().find(|p| p.price == best)
    }

    /// Substring match in either direction against a lowercase item name.
    pub fn matches(&self, lowercase_name: &str) -> bool {
        lowercase_name.contains(&self.normalized_name)
            || self.normalized_name.contains(lowercase_name)
    }
}

/// A store in the routing directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub distance_km: f64,
}
