use serde::{Deserialize, Serialize};

use crate::models::GeneratedPlan;
use crate::planner::constants::*;

/// Share of macro calories from each macronutrient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein_percentage: u32,
    pub carbs_percentage: u32,
    pub fat_percentage: u32,

    /// Calories from macros (4/4/9 kcal per gram).
    pub total_calories: f64,
}

/// Percentage split of calories from protein, carbs and fat.
///
/// Percentages are rounded independently and may not sum to exactly 100.
pub fn macro_breakdown(protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroBreakdown {
    let protein_cal = protein_g * KCAL_PER_G_PROTEIN;
    let carbs_cal = carbs_g * KCAL_PER_G_CARBS;
    let fat_cal = fat_g * KCAL_PER_G_FAT;
    let total = protein_cal + carbs_cal + fat_cal;

    if total <= 0.0 {
        return MacroBreakdown::default();
    }

    let pct = |cal: f64| ((cal / total) * 100.0).round() as u32;

    MacroBreakdown {
        protein_percentage: pct(protein_cal),
        carbs_percentage: pct(carbs_cal),
        fat_percentage: pct(fat_cal),
        total_calories: total,
    }
}

/// Macro breakdown of a whole plan.
pub fn plan_breakdown(plan: &GeneratedPlan) -> MacroBreakdown {
    macro_breakdown(plan.total_protein, plan.total_carbs, plan.total_fat)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Under,
    OnTrack,
    Over,
}

/// Classify intake against a goal: under 80%, over 120%, else on track.
pub fn progress_status(current: f64, goal: f64) -> ProgressStatus {
    if goal <= 0.0 {
        return if current > 0.0 {
            ProgressStatus::Over
        } else {
            ProgressStatus::OnTrack
        };
    }

    let percentage = (current / goal) * 100.0;
    if percentage < PROGRESS_UNDER_PCT {
        ProgressStatus::Under
    } else if percentage > PROGRESS_OVER_PCT {
        ProgressStatus::Over
    } else {
        ProgressStatus::OnTrack
    }
}
