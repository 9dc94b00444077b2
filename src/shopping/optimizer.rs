use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::PriceTable;
use crate::models::{GroceryItem, Store};

/// Weight of accumulated savings (currency units) in the route score.
pub const SAVINGS_WEIGHT: f64 = 10.0;

/// Penalty per km of distance in the route score.
pub const DISTANCE_WEIGHT: f64 = 2.0;

/// Bonus per item for which the store is cheapest.
pub const BEST_ITEM_WEIGHT: f64 = 5.0;

/// Stores in the suggested route.
pub const ROUTE_LENGTH: usize = 2;

/// Minutes per km travelled in the time estimate.
pub const MINUTES_PER_KM: f64 = 5.0;

/// Fixed in-store minutes in the time estimate.
pub const BASE_SHOPPING_MINUTES: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPrice {
    pub store: String,
    pub price: f64,
}

/// Pricing for one matched grocery item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemQuote {
    pub item_id: String,
    pub item_name: String,

    /// Catalog entry the item matched.
    pub matched_entry: String,

    pub best: BestPrice,
    pub average_price: f64,
    pub savings: f64,
}

/// A store's standing in the route ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteScore {
    pub store: String,
    pub distance_km: f64,
    pub savings: f64,
    pub item_count: u32,
    pub score: f64,
}

/// Output of [`score`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingAnalysis {
    pub quotes: Vec<ItemQuote>,

    /// Best store and price keyed by grocery item id.
    pub per_item_best: BTreeMap<String, BestPrice>,

    /// Ids of pending items with no catalog match.
    pub unmatched: Vec<String>,

    pub total_regular: f64,
    pub total_best: f64,
    pub total_savings: f64,

    /// Σ (average − store price) over every matched item the store prices.
    pub store_savings: BTreeMap<String, f64>,

    /// Number of matched items for which the store is the best store.
    pub best_store_items: BTreeMap<String, u32>,

    /// Directory stores sorted by descending score.
    pub route_ranking: Vec<RouteScore>,
}

impl ShoppingAnalysis {
    /// The top-ranked stores to visit.
    pub fn suggested_route(&self) -> &[RouteScore] {
        let n = self.route_ranking.len().min(ROUTE_LENGTH);
        &self.route_ranking[..n]
    }

    /// Travel plus shopping time for the suggested route, in minutes.
    pub fn estimated_minutes(&self) -> Option<f64> {
        let route = self.suggested_route();
        if route.is_empty() {
            return None;
        }
        let distance: f64 = route.iter().map(|r| r.distance_km).sum();
        Some(distance * MINUTES_PER_KM + BASE_SHOPPING_MINUTES)
    }

    /// Store with the highest accumulated savings.
    pub fn best_overall_store(&self) -> Option<&str> {
        self.store_savings
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(store, _)| store.as_str())
    }

    /// Number of priced items.
    pub fn item_count(&self) -> usize {
        self.quotes.len()
    }
}

/// Composite route score: savings*10 − distance*2 + best_items*5.
pub fn route_score(savings: f64, distance_km: f64, best_items: u32) -> f64 {
    savings * SAVINGS_WEIGHT - distance_km * DISTANCE_WEIGHT + best_items as f64 * BEST_ITEM_WEIGHT
}

/// Price the pending items on a grocery list and rank stores for a route.
///
/// Completed items are ignored. Items without a catalog match are listed in
/// `unmatched` and take no part in pricing. With no priced items the
/// ranking is empty.
pub fn score(items: &[GroceryItem], table: &PriceTable, stores: &[Store]) -> ShoppingAnalysis {
    let mut analysis = ShoppingAnalysis::default();

    for item in items.iter().filter(|i| !i.completed) {
        let Some(entry) = table.find_key(&item.key()) else {
            debug!(item = %item.name, "no price data for item");
            analysis.unmatched.push(item.id.clone());
            continue;
        };
        let Some(best_store) = entry.best_store() else {
            analysis.unmatched.push(item.id.clone());
            continue;
        };

        let best = BestPrice {
            store: best_store.store.clone(),
            price: best_store.price,
        };
        let average = entry.average_price();
        let savings = (average - best.price).max(0.0);

        analysis.total_best += best.price;
        analysis.total_regular += average;
        analysis.total_savings += savings;

        *analysis
            .best_store_items
            .entry(best.store.clone())
            .or_insert(0) += 1;

        for price in &entry.prices {
            *analysis
                .store_savings
                .entry(price.store.clone())
                .or_insert(0.0) += average - price.price;
        }

        analysis.per_item_best.insert(item.id.clone(), best.clone());
        analysis.quotes.push(ItemQuote {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            matched_entry: entry.item_name.clone(),
            best,
            average_price: average,
            savings,
        });
    }

    if analysis.quotes.is_empty() {
        return analysis;
    }

    let mut ranking: Vec<RouteScore> = stores
        .iter()
        .map(|store| {
            let savings = analysis
                .store_savings
                .get(&store.name)
                .copied()
                .unwrap_or(0.0);
            let item_count = analysis
                .best_store_items
                .get(&store.name)
                .copied()
                .unwrap_or(0);

            RouteScore {
                store: store.name.clone(),
                distance_km: store.distance_km,
                savings,
                item_count,
                score: route_score(savings, store.distance_km, item_count),
            }
        })
        .collect();

    // Stable: equal scores keep directory order
    ranking.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    analysis.route_ranking = ranking;

    info!(
        priced = analysis.quotes.len(),
        unmatched = analysis.unmatched.len(),
        total_savings = analysis.total_savings,
        top_store = analysis.route_ranking.first().map(|r| r.store.as_str()),
        "scored grocery list"
    );

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShoppingCatalog;

    fn item(id: &str, name: &str) -> GroceryItem {
        GroceryItem::new(id, name, "1")
    }

    #[test]
    fn test_route_score_formula() {
        assert!((route_score(1.925, 0.8, 2) - 27.65).abs() < 1e-9);
        assert!((route_score(0.0, 2.1, 0) + 4.2).abs() < 1e-9);
    }

    #[test]
    fn test_empty_list_yields_empty_ranking() {
        let catalog = ShoppingCatalog::builtin().unwrap();
        let analysis = score(&[], &catalog.prices, &catalog.stores);
        assert_eq!(analysis.total_savings, 0.0);
        assert!(analysis.route_ranking.is_empty());
        assert_eq!(analysis.estimated_minutes(), None);
    }

    #[test]
    fn test_empty_table_yields_empty_ranking() {
        let catalog = ShoppingCatalog::builtin().unwrap();
        let table = PriceTable::default();
        let analysis = score(&[item("1", "Rice")], &table, &catalog.stores);
        assert_eq!(analysis.total_savings, 0.0);
        assert!(analysis.route_ranking.is_empty());
        assert_eq!(analysis.unmatched, vec!["1".to_string()]);
    }

    #[test]
    fn test_item_names_match_case_and_padding_insensitively() {
        let catalog = ShoppingCatalog::builtin().unwrap();
        let analysis = score(
            &[item("1", "  chicken BREAST ")],
            &catalog.prices,
            &catalog.stores,
        );
        assert!(analysis.unmatched.is_empty());
        assert_eq!(analysis.quotes[0].matched_entry, "Chicken Breast");
    }

    #[test]
    fn test_completed_items_are_skipped() {
        let catalog = ShoppingCatalog::builtin().unwrap();
        let mut done = item("1", "Rice");
        done.completed = true;

        let analysis = score(&[done], &catalog.prices, &catalog.stores);
        assert!(analysis.quotes.is_empty());
        assert!(analysis.unmatched.is_empty());
    }

    #[test]
    fn test_unmatched_items_are_reported() {
        let catalog = ShoppingCatalog::builtin().unwrap();
        let analysis = score(
            &[item("1", "Saffron"), item("2", "Milk")],
            &catalog.prices,
            &catalog.stores,
        );
        assert_eq!(analysis.unmatched, vec!["1".to_string()]);
        assert_eq!(analysis.item_count(), 1);
        assert_eq!(analysis.per_item_best["2"].store, "Lidl");
    }

    #[test]
    fn test_expensive_store_accumulates_negative_savings() {
        let catalog = ShoppingCatalog::builtin().unwrap();
        let analysis = score(&[item("1", "Olive Oil")], &catalog.prices, &catalog.stores);
        assert!(analysis.store_savings["Albert Heijn"] < 0.0);
        assert!(analysis.store_savings["Lidl"] > 0.0);
        assert_eq!(analysis.best_overall_store(), Some("Lidl"));
    }
}
