mod grocery;
mod meal;
mod profile;

pub use grocery::{GroceryItem, ItemPrices, Store, StorePrice};
pub use meal::{round2, Difficulty, GeneratedMeal, GeneratedPlan, MealTemplate, MealType};
pub use profile::{ActivityLevel, HealthProfile, Sex, WeightGoal};
