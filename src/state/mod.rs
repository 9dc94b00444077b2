mod export;
mod manager;
mod persistence;

pub use export::{load_plan_json, save_plan_csv, save_plan_json, PlannedMealRow};
pub use manager::{GroceryListManager, NewItem};
pub use persistence::{load_grocery_list, save_grocery_list};
