pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod profile;
pub mod shopping;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{GeneratedMeal, GeneratedPlan, GroceryItem, MealTemplate};
