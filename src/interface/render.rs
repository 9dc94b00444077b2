use crate::models::{GeneratedPlan, GroceryItem, HealthProfile, MealType};
use crate::planner::{meal_type_heading, plan_breakdown, progress_status, PlanWarning, ProgressStatus};
use crate::profile::{BmiTrend, ProfileSummary, WeightProgress};
use crate::shopping::ShoppingAnalysis;

/// Display a generated plan with per-meal nutrition and totals.
pub fn display_plan(plan: &GeneratedPlan, warnings: &[PlanWarning], target_calories: i32) {
    for warning in warnings {
        println!("Warning: {}", warning);
    }

    if plan.is_empty() {
        println!("No meals planned (zero calorie budget or meal count).");
        return;
    }

    println!();
    println!("=== Meal Plan {} ({}) ===", plan.plan_date, plan.plan_id);
    println!();

    let max_name_len = plan
        .meals
        .iter()
        .map(|m| m.food_name.len())
        .max()
        .unwrap_or(10);

    for meal in &plan.meals {
        let heading = if meal.meal_type == MealType::Snack {
            format!("{} {}", meal_type_heading(meal.meal_type), meal.meal_order)
        } else {
            meal_type_heading(meal.meal_type).to_string()
        };

        println!(
            "{} {:<10} {:<width$} {:>4} kcal | P {:>6.2} C {:>6.2} F {:>6.2} | x{:.2} {}",
            meal.scheduled_time,
            heading,
            meal.food_name,
            meal.calories,
            meal.protein_g,
            meal.carbs_g,
            meal.fat_g,
            meal.serving_size,
            meal.serving_unit,
            width = max_name_len
        );
    }

    let breakdown = plan_breakdown(plan);

    println!();
    println!("--- Summary ---");
    println!("Meals: {}", plan.meals.len());
    println!(
        "Total calories: {} of {} target ({})",
        plan.total_calories,
        target_calories,
        progress_label(progress_status(plan.total_calories as f64, target_calories as f64))
    );
    println!(
        "Protein {:.2} g ({}%) | Carbs {:.2} g ({}%) | Fat {:.2} g ({}%)",
        plan.total_protein,
        breakdown.protein_percentage,
        plan.total_carbs,
        breakdown.carbs_percentage,
        plan.total_fat,
        breakdown.fat_percentage
    );
    println!();
}

fn progress_label(status: ProgressStatus) -> &'static str {
    match status {
        ProgressStatus::Under => "under target",
        ProgressStatus::OnTrack => "on track",
        ProgressStatus::Over => "over target",
    }
}

/// Display the grocery list, pending items first.
pub fn display_grocery_list(items: &[GroceryItem]) {
    if items.is_empty() {
        println!("Grocery list is empty.");
        return;
    }

    let pending = items.iter().filter(|i| !i.completed).count();

    println!();
    println!("=== Grocery List ({} pending, {} total) ===", pending, items.len());
    println!();

    let mut ordered: Vec<&GroceryItem> = items.iter().collect();
    ordered.sort_by_key(|i| i.completed);

    for item in ordered {
        let mark = if item.completed { "x" } else { " " };
        let recipe = item
            .from_recipe
            .as_ref()
            .map(|r| format!("  (for {})", r))
            .unwrap_or_default();

        println!(
            "  [{}] {:<14} {} - {} [{}]{}",
            mark, item.id, item.name, item.amount, item.category, recipe
        );
    }

    println!();
}

/// Display per-item best prices, savings and the suggested route.
pub fn display_shopping(analysis: &ShoppingAnalysis, items: &[GroceryItem]) {
    if analysis.quotes.is_empty() {
        println!("No priced items on the grocery list.");
    } else {
        println!();
        println!("=== Best Prices ===");
        println!();

        for quote in &analysis.quotes {
            println!(
                "  {:<20} {:<12} €{:>6.2}  (avg €{:.2}, save €{:.2})",
                quote.item_name, quote.best.store, quote.best.price, quote.average_price, quote.savings
            );
        }

        println!();
        println!("Regular total: €{:.2}", analysis.total_regular);
        println!("Best total:    €{:.2}", analysis.total_best);
        println!("You save:      €{:.2}", analysis.total_savings);
    }

    if !analysis.unmatched.is_empty() {
        let names: Vec<&str> = analysis
            .unmatched
            .iter()
            .filter_map(|id| items.iter().find(|i| &i.id == id))
            .map(|i| i.name.as_str())
            .collect();
        println!("No price data: {}", names.join(", "));
    }

    if analysis.route_ranking.is_empty() {
        println!();
        return;
    }

    println!();
    println!("--- Store Ranking ---");
    for (i, route) in analysis.route_ranking.iter().enumerate() {
        println!(
            "{:>3}. {:<14} {:>4.1} km | savings €{:>6.2} | best for {} | score {:.2}",
            i + 1,
            route.store,
            route.distance_km,
            route.savings,
            route.item_count,
            route.score
        );
    }

    let route: Vec<&str> = analysis
        .suggested_route()
        .iter()
        .map(|r| r.store.as_str())
        .collect();

    println!();
    println!("Suggested route: {}", route.join(" -> "));
    if let Some(minutes) = analysis.estimated_minutes() {
        println!("Estimated time: {:.0} min", minutes);
    }
    if let Some(store) = analysis.best_overall_store() {
        println!("Best overall store: {}", store);
    }
    println!();
}

/// Display derived health metrics.
pub fn display_profile(profile: &HealthProfile, summary: &ProfileSummary) {
    println!();
    println!("=== Health Profile ===");
    println!(
        "Weight {:.1} kg | Height {:.1} cm | Age {}",
        profile.weight_kg, profile.height_cm, profile.age_years
    );
    println!("Activity: {}", profile.activity_level.label());
    println!();
    println!("BMI: {:.1} ({})", summary.bmi, summary.bmi_category.as_str());
    println!("BMR: {:.0} kcal", summary.bmr);
    println!("Daily calorie target: {} kcal", summary.daily_calories);
    println!();
}

/// Display progress toward a target weight.
pub fn display_weight_progress(progress: &WeightProgress, target_weight: f64, trend: Option<&BmiTrend>) {
    println!();
    println!("=== Weight Progress ===");
    println!(
        "Current {:.1} kg | Change {:+.1} kg | Target {:.1} kg",
        progress.current_weight, progress.weight_change, target_weight
    );
    println!(
        "Progress to goal: {:.0}% ({:.1} kg to go)",
        progress.progress_percentage, progress.remaining_kg
    );

    if let Some(trend) = trend {
        println!(
            "BMI: {:.1} | {:+.1} from start | average {:.1}",
            trend.current, trend.trend, trend.average
        );
    }
    println!();
}
