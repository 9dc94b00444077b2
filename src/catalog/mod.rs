mod meals;
mod shopping;

pub use meals::MealCatalog;
pub use shopping::{PriceTable, ShoppingCatalog};
