use assert_float_eq::*;

use wellnoosh_planner::catalog::ShoppingCatalog;
use wellnoosh_planner::models::GroceryItem;
use wellnoosh_planner::shopping::score;
use wellnoosh_planner::state::{GroceryListManager, NewItem};

fn items(names: &[&str]) -> Vec<GroceryItem> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| GroceryItem::new(i.to_string(), *name, "1"))
        .collect()
}

#[test]
fn test_golden_list_ranks_lidl_first() {
    let catalog = ShoppingCatalog::builtin().unwrap();
    let list = items(&["Chicken Breast", "Broccoli", "Rice"]);

    let analysis = score(&list, &catalog.prices, &catalog.stores);

    let order: Vec<&str> = analysis
        .route_ranking
        .iter()
        .map(|r| r.store.as_str())
        .collect();
    assert_eq!(order, vec!["Lidl", "Jumbo", "Plus", "Albert Heijn"]);

    let lidl = &analysis.route_ranking[0];
    assert_eq!(lidl.item_count, 2);
    assert_float_absolute_eq!(lidl.savings, 1.925, 1e-9);
    assert_float_absolute_eq!(lidl.score, 27.65, 1e-9);

    assert_float_absolute_eq!(analysis.total_best, 9.17, 1e-9);
    assert_float_absolute_eq!(analysis.total_regular, 11.195, 1e-9);
    assert_float_absolute_eq!(analysis.total_savings, 2.025, 1e-9);

    assert_eq!(analysis.per_item_best["1"].store, "Jumbo");
    assert_eq!(analysis.best_overall_store(), Some("Lidl"));

    let route: Vec<&str> = analysis
        .suggested_route()
        .iter()
        .map(|r| r.store.as_str())
        .collect();
    assert_eq!(route, vec!["Lidl", "Jumbo"]);

    // (0.8 + 1.2) km * 5 + 30
    assert_float_absolute_eq!(analysis.estimated_minutes().unwrap(), 40.0, 1e-9);
}

#[test]
fn test_savings_never_negative() {
    let catalog = ShoppingCatalog::builtin().unwrap();
    let names: Vec<&str> = catalog
        .prices
        .entries()
        .iter()
        .map(|e| e.item_name.as_str())
        .collect();
    let list = items(&names);

    let analysis = score(&list, &catalog.prices, &catalog.stores);

    assert!(analysis.unmatched.is_empty());
    assert!(analysis.total_savings >= 0.0);
    assert!(analysis.total_best <= analysis.total_regular);
    for quote in &analysis.quotes {
        assert!(quote.savings >= 0.0);
        assert!(quote.best.price <= quote.average_price);
    }
}

#[test]
fn test_ranking_is_sorted_descending() {
    let catalog = ShoppingCatalog::builtin().unwrap();
    let list = items(&["Bread", "Cheese", "Eggs", "Apples", "Ground Beef"]);

    let analysis = score(&list, &catalog.prices, &catalog.stores);

    assert_eq!(analysis.route_ranking.len(), catalog.stores.len());
    for pair in analysis.route_ranking.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_only_unmatched_items_give_no_route() {
    let catalog = ShoppingCatalog::builtin().unwrap();
    let list = items(&["Saffron", "Vanilla Pods"]);

    let analysis = score(&list, &catalog.prices, &catalog.stores);

    assert_eq!(analysis.unmatched.len(), 2);
    assert!(analysis.route_ranking.is_empty());
    assert!(analysis.suggested_route().is_empty());
    assert_eq!(analysis.estimated_minutes(), None);
    assert_eq!(analysis.best_overall_store(), None);
}

#[test]
fn test_bought_items_drop_out_of_analysis() {
    let catalog = ShoppingCatalog::builtin().unwrap();
    let mut manager = GroceryListManager::new(Vec::new());

    let chicken = manager
        .add(NewItem {
            name: "Chicken Breast".to_string(),
            amount: "500 g".to_string(),
            ..Default::default()
        })
        .unwrap();
    manager
        .add(NewItem {
            name: "Broccoli".to_string(),
            amount: "1".to_string(),
            ..Default::default()
        })
        .unwrap();
    manager.toggle(&chicken).unwrap();

    let analysis = score(manager.items(), &catalog.prices, &catalog.stores);

    assert_eq!(analysis.item_count(), 1);
    assert!(!analysis.per_item_best.contains_key(&chicken));
    assert_eq!(analysis.route_ranking[0].store, "Jumbo");
}
