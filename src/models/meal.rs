use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Position of a meal within the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Every meal type, in day order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// A candidate meal from the catalog, described at one serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealTemplate {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,

    /// Meal-type bucket the template belongs to.
    pub category: MealType,

    pub preparation_method: String,
    pub cooking_time_minutes: u32,
    pub difficulty_level: Difficulty,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl MealTemplate {
    /// Case-insensitive tag check.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether the lowercase name contains `needle`.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Non-negative nutrition and a positive calorie count.
    pub fn is_valid(&self) -> bool {
        self.calories > 0.0
            && self.protein_g >= 0.0
            && self.carbs_g >= 0.0
            && self.fat_g >= 0.0
            && self.fiber_g >= 0.0
    }
}

/// One scheduled meal in a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMeal {
    pub meal_type: MealType,

    /// Order within the meal type (snack 1, snack 2).
    pub meal_order: u32,

    /// Wall-clock time in HH:MM.
    pub scheduled_time: String,

    pub food_name: String,
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,

    /// Multiplier applied to the template, within [0.5, 2.0].
    pub serving_size: f64,
    pub serving_unit: String,

    pub category: String,
    pub preparation_method: String,
    pub cooking_time_minutes: u32,
    pub difficulty_level: Difficulty,
    pub tags: Vec<String>,
}

/// A full day of meals with totals derived from the meal list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub plan_id: String,
    pub plan_date: NaiveDate,
    pub total_calories: u32,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub meals: Vec<GeneratedMeal>,
}

impl GeneratedPlan {
    /// Build a plan, summing totals from `meals`.
    pub fn from_meals(plan_id: String, plan_date: NaiveDate, meals: Vec<GeneratedMeal>) -> Self {
        let total_calories = meals.iter().map(|m| m.calories).sum();
        let total_protein = round2(meals.iter().map(|m| m.protein_g).sum());
        let total_carbs = round2(meals.iter().map(|m| m.carbs_g).sum());
        let total_fat = round2(meals.iter().map(|m| m.fat_g).sum());

        Self {
            plan_id,
            plan_date,
            total_calories,
            total_protein,
            total_carbs,
            total_fat,
            meals,
        }
    }

    /// Meals that are not snacks.
    pub fn main_meals(&self) -> impl Iterator<Item = &GeneratedMeal> {
        self.meals.iter().filter(|m| m.meal_type != MealType::Snack)
    }

    pub fn snacks(&self) -> impl Iterator<Item = &GeneratedMeal> {
        self.meals.iter().filter(|m| m.meal_type == MealType::Snack)
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Round to two decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal(meal_type: MealType, calories: u32, protein: f64) -> GeneratedMeal {
        GeneratedMeal {
            meal_type,
            meal_order: 1,
            scheduled_time: "08:00".to_string(),
            food_name: "Test".to_string(),
            calories,
            protein_g: protein,
            carbs_g: 10.005,
            fat_g: 1.0,
            fiber_g: 0.0,
            serving_size: 1.0,
            serving_unit: "serving".to_string(),
            category: meal_type.to_string(),
            preparation_method: "Raw".to_string(),
            cooking_time_minutes: 0,
            difficulty_level: Difficulty::Easy,
            tags: vec![],
        }
    }

    #[test]
    fn test_plan_totals_follow_meals() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let plan = GeneratedPlan::from_meals(
            "p".to_string(),
            date,
            vec![
                sample_meal(MealType::Breakfast, 400, 12.5),
                sample_meal(MealType::Snack, 150, 3.25),
            ],
        );

        assert_eq!(plan.total_calories, 550);
        assert!((plan.total_protein - 15.75).abs() < 1e-9);
        assert_eq!(plan.main_meals().count(), 1);
        assert_eq!(plan.snacks().count(), 1);
    }

    #[test]
    fn test_meal_type_serde_lowercase() {
        let json = serde_json::to_string(&MealType::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");
        let parsed: MealType = serde_json::from_str("\"snack\"").unwrap();
        assert_eq!(parsed, MealType::Snack);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235001), 1.24);
        assert_eq!(round2(0.0), 0.0);
    }
}
