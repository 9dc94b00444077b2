use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::models::GroceryItem;

/// Load the grocery list from a JSON file.
///
/// A missing file is an empty list. Duplicate ids keep the first occurrence.
pub fn load_grocery_list<P: AsRef<Path>>(path: P) -> Result<Vec<GroceryItem>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let items: Vec<GroceryItem> = serde_json::from_str(&content)?;

    let mut seen = HashSet::new();
    let mut deduped = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.id.clone()) {
            deduped.push(item);
        } else {
            warn!(id = %item.id, "dropping grocery item with duplicate id");
        }
    }

    Ok(deduped)
}

/// Save the grocery list as pretty JSON.
pub fn save_grocery_list<P: AsRef<Path>>(path: P, items: &[GroceryItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_load_and_save_roundtrip() {
        let mut milk = GroceryItem::new("1", "Milk", "1 L");
        milk.completed = true;
        let items = vec![milk, GroceryItem::new("2", "Bread", "1 loaf")];

        let file = NamedTempFile::new().unwrap();
        save_grocery_list(file.path(), &items).unwrap();

        let reloaded = load_grocery_list(file.path()).unwrap();
        assert_eq!(reloaded, items);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let items = load_grocery_list(dir.path().join("grocery.json")).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let json = r#"[
            {"id": "1", "name": "Milk", "amount": "1 L", "category": "Dairy", "added_date": "2025-01-01T08:00:00Z"},
            {"id": "1", "name": "Bread", "amount": "1", "category": "Bakery", "added_date": "2025-01-01T08:00:00Z", "completed": true}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_grocery_list(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
        assert!(!items[0].completed);
    }
}
