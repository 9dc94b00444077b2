use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::models::{GeneratedMeal, GeneratedPlan, MealType};

/// Priority written for snacks and main meals (1 lowest, 5 highest).
pub const SNACK_PRIORITY: u8 = 2;
pub const MAIN_MEAL_PRIORITY: u8 = 3;

/// One planned-meal row as written to CSV.
#[derive(Debug, Serialize)]
pub struct PlannedMealRow<'a> {
    pub plan_id: &'a str,
    pub plan_date: NaiveDate,
    pub meal_type: MealType,
    pub meal_order: u32,
    pub scheduled_time: &'a str,
    pub food_name: &'a str,
    pub calories: u32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub serving_size: f64,
    pub serving_unit: &'a str,
    pub category: &'a str,
    pub preparation_method: &'a str,
    pub cooking_time_minutes: u32,
    pub difficulty_level: &'static str,
    pub priority_level: u8,
    pub tags: String,
}

impl<'a> PlannedMealRow<'a> {
    fn new(plan: &'a GeneratedPlan, meal: &'a GeneratedMeal) -> Self {
        Self {
            plan_id: &plan.plan_id,
            plan_date: plan.plan_date,
            meal_type: meal.meal_type,
            meal_order: meal.meal_order,
            scheduled_time: &meal.scheduled_time,
            food_name: &meal.food_name,
            calories: meal.calories,
            protein_g: meal.protein_g,
            carbs_g: meal.carbs_g,
            fat_g: meal.fat_g,
            fiber_g: meal.fiber_g,
            serving_size: meal.serving_size,
            serving_unit: &meal.serving_unit,
            category: &meal.category,
            preparation_method: &meal.preparation_method,
            cooking_time_minutes: meal.cooking_time_minutes,
            difficulty_level: meal.difficulty_level.as_str(),
            priority_level: if meal.meal_type == MealType::Snack {
                SNACK_PRIORITY
            } else {
                MAIN_MEAL_PRIORITY
            },
            tags: meal.tags.join(";"),
        }
    }
}

/// Write the plan as pretty JSON.
pub fn save_plan_json<P: AsRef<Path>>(path: P, plan: &GeneratedPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_plan_json<P: AsRef<Path>>(path: P) -> Result<GeneratedPlan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write one CSV row per planned meal, with a header.
pub fn save_plan_csv<P: AsRef<Path>>(path: P, plan: &GeneratedPlan) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for meal in &plan.meals {
        writer.serialize(PlannedMealRow::new(plan, meal))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MealCatalog;
    use crate::planner::{generate, GenerationRequest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn sample_plan() -> GeneratedPlan {
        let catalog = MealCatalog::builtin().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let request = GenerationRequest::for_date(date);
        let mut rng = StdRng::seed_from_u64(3);
        generate(&catalog, &request, &mut rng).unwrap().plan
    }

    #[test]
    fn test_csv_has_one_row_per_meal() {
        let plan = sample_plan();
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.csv");

        save_plan_csv(&path, &plan).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "plan_id");
        assert_eq!(&headers[2], "meal_type");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), plan.meals.len());
        assert_eq!(&rows[0][2], "breakfast");
        assert_eq!(&rows[0][4], "08:00");
    }

    #[test]
    fn test_csv_records_meal_details_and_priority() {
        let plan = sample_plan();
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.csv");

        save_plan_csv(&path, &plan).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        let column = |name: &str| headers.iter().position(|h| h == name).unwrap();
        let (category, method, minutes, difficulty, priority) = (
            column("category"),
            column("preparation_method"),
            column("cooking_time_minutes"),
            column("difficulty_level"),
            column("priority_level"),
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        for (row, meal) in rows.iter().zip(&plan.meals) {
            assert_eq!(&row[category], meal.category);
            assert_eq!(&row[method], meal.preparation_method);
            assert_eq!(row[minutes].parse::<u32>().unwrap(), meal.cooking_time_minutes);
            assert_eq!(&row[difficulty], meal.difficulty_level.as_str());

            let expected = if meal.meal_type == MealType::Snack { "2" } else { "3" };
            assert_eq!(&row[priority], expected);
        }
        assert!(plan.meals.iter().any(|m| m.meal_type == MealType::Snack));
    }

    #[test]
    fn test_json_roundtrip() {
        let plan = sample_plan();
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");

        save_plan_json(&path, &plan).unwrap();

        let reloaded = load_plan_json(&path).unwrap();
        assert_eq!(reloaded, plan);
    }
}
