use chrono::Utc;

use crate::error::{PlannerError, Result};
use crate::models::GroceryItem;

/// Fields for a new grocery entry.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: String,
    pub amount: String,
    pub category: Option<String>,
    pub from_recipe: Option<String>,
}

/// Manages the grocery list: adding, completing and clearing entries.
pub struct GroceryListManager {
    /// Items in insertion order.
    items: Vec<GroceryItem>,
}

impl GroceryListManager {
    pub fn new(items: Vec<GroceryItem>) -> Self {
        Self { items }
    }

    /// Next free id: the current time in milliseconds, bumped past any taken id.
    fn next_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while self.items.iter().any(|i| i.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Append an item and return its id.
    pub fn add(&mut self, new: NewItem) -> Result<String> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(PlannerError::InvalidInput(
                "item name must not be empty".to_string(),
            ));
        }

        let id = self.next_id();
        let mut item = GroceryItem::new(id.clone(), name, new.amount.trim());
        if let Some(category) = new.category {
            item.category = category;
        }
        item.from_recipe = new.from_recipe;

        self.items.push(item);
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Flip the completed flag; returns the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| PlannerError::ItemNotFound(id.to_string()))?;

        item.completed = !item.completed;
        Ok(item.completed)
    }

    pub fn remove(&mut self, id: &str) -> Result<GroceryItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| PlannerError::ItemNotFound(id.to_string()))?;

        Ok(self.items.remove(index))
    }

    /// Drop completed items; returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|i| !i.completed);
        before - self.items.len()
    }

    /// Items still to buy.
    pub fn pending(&self) -> Vec<&GroceryItem> {
        self.items.iter().filter(|i| !i.completed).collect()
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            amount: "1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut manager = GroceryListManager::new(Vec::new());
        let a = manager.add(new_item("Milk")).unwrap();
        let b = manager.add(new_item("Bread")).unwrap();
        let c = manager.add(new_item("Eggs")).unwrap();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(manager.len(), 3);
        assert_eq!(manager.get(&b).unwrap().name, "Bread");
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut manager = GroceryListManager::new(Vec::new());
        assert!(matches!(
            manager.add(new_item("  ")),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_add_category_and_recipe() {
        let mut manager = GroceryListManager::new(Vec::new());
        let id = manager
            .add(NewItem {
                name: "Salmon".to_string(),
                amount: "2 fillets".to_string(),
                category: Some("Fish".to_string()),
                from_recipe: Some("Baked Salmon".to_string()),
            })
            .unwrap();

        let item = manager.get(&id).unwrap();
        assert_eq!(item.category, "Fish");
        assert_eq!(item.from_recipe.as_deref(), Some("Baked Salmon"));
    }

    #[test]
    fn test_toggle_and_clear_completed() {
        let mut manager = GroceryListManager::new(Vec::new());
        let milk = manager.add(new_item("Milk")).unwrap();
        manager.add(new_item("Bread")).unwrap();

        assert!(manager.toggle(&milk).unwrap());
        assert_eq!(manager.pending().len(), 1);

        assert_eq!(manager.clear_completed(), 1);
        assert_eq!(manager.len(), 1);
        assert!(manager.get(&milk).is_none());
    }

    #[test]
    fn test_unknown_id() {
        let mut manager = GroceryListManager::new(Vec::new());
        assert!(matches!(manager.toggle("42"), Err(PlannerError::ItemNotFound(_))));
        assert!(matches!(manager.remove("42"), Err(PlannerError::ItemNotFound(_))));
    }
}
