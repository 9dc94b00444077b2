use std::fmt;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::MealCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{round2, GeneratedMeal, GeneratedPlan, MealTemplate, MealType};
use crate::planner::constants::*;
use crate::planner::filters::DietaryFilter;

/// Parameters for one day's plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub user_id: String,
    pub plan_date: NaiveDate,
    pub target_calories: i32,
    pub dietary_restrictions: Vec<String>,
    pub meals_per_day: i32,
    pub include_snacks: bool,
}

impl GenerationRequest {
    /// A request with default targets for the given date.
    pub fn for_date(plan_date: NaiveDate) -> Self {
        Self {
            user_id: "local".to_string(),
            plan_date,
            target_calories: DEFAULT_TARGET_CALORIES,
            dietary_restrictions: Vec::new(),
            meals_per_day: DEFAULT_MEALS_PER_DAY,
            include_snacks: true,
        }
    }

    /// Reject negative calorie targets and meal counts.
    pub fn validate(&self) -> Result<()> {
        if self.target_calories < 0 {
            return Err(PlannerError::InvalidInput(format!(
                "target calories must be >= 0, got {}",
                self.target_calories
            )));
        }
        if self.meals_per_day < 0 {
            return Err(PlannerError::InvalidInput(format!(
                "meals per day must be >= 0, got {}",
                self.meals_per_day
            )));
        }
        Ok(())
    }

    pub fn plan_id(&self) -> String {
        format!("plan_{}_{}", self.user_id, self.plan_date.format("%Y-%m-%d"))
    }
}

/// Non-fatal conditions hit while generating a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// More main meals requested than there are slots.
    MealsPerDayExceedsSlots { requested: u32, available: u32 },

    /// No template in the bucket passed the dietary filter.
    DietaryFallback { meal_type: MealType, template: String },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::MealsPerDayExceedsSlots {
                requested,
                available,
            } => write!(
                f,
                "{} main meals requested but only {} slots exist; extra meals left unfilled",
                requested, available
            ),
            PlanWarning::DietaryFallback {
                meal_type,
                template,
            } => write!(
                f,
                "no {} option matches the dietary restrictions; using '{}'",
                meal_type, template
            ),
        }
    }
}

/// A generated plan together with the warnings raised for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub plan: GeneratedPlan,
    pub warnings: Vec<PlanWarning>,
}

/// Clamp the ratio of target to template calories into the serving bounds.
pub fn serving_multiplier(target_calories: f64, template_calories: f64) -> f64 {
    let ratio = if template_calories > 0.0 {
        target_calories / template_calories
    } else {
        SERVING_MIN
    };
    ratio.clamp(SERVING_MIN, SERVING_MAX)
}

/// Scale a template by `multiplier` into a scheduled meal.
pub fn scale_template(
    template: &MealTemplate,
    multiplier: f64,
    meal_type: MealType,
    meal_order: u32,
    scheduled_time: &str,
) -> GeneratedMeal {
    GeneratedMeal {
        meal_type,
        meal_order,
        scheduled_time: scheduled_time.to_string(),
        food_name: template.name.clone(),
        calories: (template.calories * multiplier).round() as u32,
        protein_g: round2(template.protein_g * multiplier),
        carbs_g: round2(template.carbs_g * multiplier),
        fat_g: round2(template.fat_g * multiplier),
        fiber_g: round2(template.fiber_g * multiplier),
        serving_size: multiplier,
        serving_unit: SERVING_UNIT.to_string(),
        category: template.category.to_string(),
        preparation_method: template.preparation_method.clone(),
        cooking_time_minutes: template.cooking_time_minutes,
        difficulty_level: template.difficulty_level,
        tags: template.tags.clone(),
    }
}

/// Pick a main-meal template for one slot.
///
/// Returns the template and whether the unfiltered fallback was used.
fn pick_main_template<'a, R: Rng + ?Sized>(
    catalog: &'a MealCatalog,
    meal_type: MealType,
    filter: &DietaryFilter,
    rng: &mut R,
) -> Option<(&'a MealTemplate, bool)> {
    let bucket = catalog.bucket(meal_type);
    let candidates = filter.apply(&bucket);

    match candidates.choose(rng) {
        Some(template) => Some((*template, false)),
        None => bucket.first().map(|t| (*t, true)),
    }
}

/// Generate one day's meal plan.
///
/// 80% of the target goes to main meals (split evenly across the requested
/// count), 20% to at most two snacks. Never fails for valid input: a slot
/// whose filtered bucket is empty falls back to the bucket's first template.
pub fn generate<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Generation> {
    request.validate()?;

    let target = request.target_calories as f64;
    let meals_per_day = request.meals_per_day as u32;
    let filter = DietaryFilter::from_restrictions(&request.dietary_restrictions);
    let mut warnings = Vec::new();

    let per_meal_calories = if meals_per_day > 0 {
        (target * MAIN_MEAL_SHARE / meals_per_day as f64).floor()
    } else {
        0.0
    };
    let snack_calories = if request.include_snacks {
        (target * SNACK_SHARE).floor()
    } else {
        0.0
    };

    if meals_per_day as usize > MAIN_SLOTS.len() {
        let warning = PlanWarning::MealsPerDayExceedsSlots {
            requested: meals_per_day,
            available: MAIN_SLOTS.len() as u32,
        };
        warn!(%warning, "meal slot configuration");
        warnings.push(warning);
    }

    let mut meals = Vec::new();

    for (meal_type, time) in MAIN_SLOTS.iter().take(meals_per_day as usize) {
        let Some((template, fell_back)) = pick_main_template(catalog, *meal_type, &filter, rng)
        else {
            continue;
        };

        if fell_back {
            let warning = PlanWarning::DietaryFallback {
                meal_type: *meal_type,
                template: template.name.clone(),
            };
            warn!(%warning, "dietary filter emptied slot");
            warnings.push(warning);
        }

        let multiplier = serving_multiplier(per_meal_calories, template.calories);
        debug!(
            meal_type = %meal_type,
            template = %template.name,
            multiplier,
            "selected main meal"
        );
        meals.push(scale_template(template, multiplier, *meal_type, 1, time));
    }

    if request.include_snacks && snack_calories > 0.0 {
        let snack_count = ((snack_calories / CALORIES_PER_SNACK).ceil() as usize).min(MAX_SNACKS);
        let per_snack_calories = snack_calories / snack_count as f64;
        let snacks = catalog.bucket(MealType::Snack);

        for (i, time) in SNACK_TIMES.iter().take(snack_count).enumerate() {
            let Some(template) = snacks.choose(rng) else {
                break;
            };
            let multiplier = serving_multiplier(per_snack_calories, template.calories);
            debug!(template = %template.name, multiplier, "selected snack");
            meals.push(scale_template(
                template,
                multiplier,
                MealType::Snack,
                i as u32 + 1,
                time,
            ));
        }
    }

    let plan = GeneratedPlan::from_meals(request.plan_id(), request.plan_date, meals);

    info!(
        plan_id = %plan.plan_id,
        meals = plan.meals.len(),
        total_calories = plan.total_calories,
        protein = plan.total_protein,
        carbs = plan.total_carbs,
        fat = plan.total_fat,
        "generated meal plan"
    );

    Ok(Generation { plan, warnings })
}

/// Discard `previous` and draw a fresh plan for the same request.
pub fn regenerate<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    previous: &GeneratedPlan,
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Generation> {
    debug!(plan_id = %previous.plan_id, "discarding plan for regeneration");
    generate(catalog, request, rng)
}
