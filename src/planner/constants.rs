use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::MealType;

/// Default daily calorie target when the profile has none.
pub const DEFAULT_TARGET_CALORIES: i32 = 2000;

/// Default number of main meals.
pub const DEFAULT_MEALS_PER_DAY: i32 = 3;

/// Share of the daily target spread across main meals.
pub const MAIN_MEAL_SHARE: f64 = 0.8;

/// Share of the daily target reserved for snacks.
pub const SNACK_SHARE: f64 = 0.2;

/// Serving multiplier bounds.
pub const SERVING_MIN: f64 = 0.5;
pub const SERVING_MAX: f64 = 2.0;

/// Nominal calories per snack, used to size the snack count.
pub const CALORIES_PER_SNACK: f64 = 160.0;

/// Upper bound on snacks per day.
pub const MAX_SNACKS: usize = 2;

pub const SERVING_UNIT: &str = "serving";

/// Main meal slots in day order with their scheduled times.
pub const MAIN_SLOTS: [(MealType, &str); 3] = [
    (MealType::Breakfast, "08:00"),
    (MealType::Lunch, "12:30"),
    (MealType::Dinner, "18:00"),
];

/// Snack times, one per snack slot.
pub const SNACK_TIMES: [&str; MAX_SNACKS] = ["10:30", "15:30"];

// ─────────────────────────────────────────────────────────────────────────────
// Dietary restrictions
// ─────────────────────────────────────────────────────────────────────────────

pub const VEGETARIAN: &str = "vegetarian";
pub const LOW_CARB: &str = "low-carb";
pub const HIGH_PROTEIN: &str = "high-protein";

/// Name fragments marking a template as containing meat or fish.
pub const ANIMAL_KEYWORDS: [&str; 3] = ["chicken", "beef", "salmon"];

/// Low-carb templates must stay at or below this many grams of carbs.
pub const LOW_CARB_MAX_CARBS_G: f64 = 30.0;

/// High-protein templates must have at least this many grams of protein.
pub const HIGH_PROTEIN_MIN_PROTEIN_G: f64 = 15.0;

/// Restriction tags the health profile may send.
pub const RESTRICTION_VOCABULARY: [&str; 8] = [
    VEGETARIAN,
    "vegan",
    LOW_CARB,
    HIGH_PROTEIN,
    "gluten-free",
    "dairy-free",
    "pescatarian",
    "keto",
];

/// Minimum Jaro-Winkler similarity for a restriction suggestion.
pub const RESTRICTION_SUGGEST_THRESHOLD: f64 = 0.85;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Progress below this percentage of goal counts as under target.
pub const PROGRESS_UNDER_PCT: f64 = 80.0;

/// Progress above this percentage of goal counts as over target.
pub const PROGRESS_OVER_PCT: f64 = 120.0;

/// Map from meal type to human-readable heading.
pub static MEAL_TYPE_HEADINGS: LazyLock<HashMap<MealType, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(MealType::Breakfast, "Breakfast");
    m.insert(MealType::Lunch, "Lunch");
    m.insert(MealType::Dinner, "Dinner");
    m.insert(MealType::Snack, "Snack");
    m
});

/// Get the display heading for a meal type.
pub fn meal_type_heading(meal_type: MealType) -> &'static str {
    MEAL_TYPE_HEADINGS.get(&meal_type).copied().unwrap_or("Meal")
}
