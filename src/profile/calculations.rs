use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, HealthProfile, Sex, WeightGoal};

/// Daily calorie adjustment applied for lose/gain goals.
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Results derived from a health profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub daily_calories: i32,
}

fn check_body(weight_kg: f64, height_cm: f64) -> Result<()> {
    if !(weight_kg > 0.0) {
        return Err(PlannerError::InvalidInput(format!(
            "weight must be positive, got {}",
            weight_kg
        )));
    }
    if !(height_cm > 0.0) {
        return Err(PlannerError::InvalidInput(format!(
            "height must be positive, got {}",
            height_cm
        )));
    }
    Ok(())
}

/// Body mass index rounded to one decimal.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    check_body(weight_kg, height_cm)?;
    let height_m = height_cm / 100.0;
    Ok((weight_kg / (height_m * height_m) * 10.0).round() / 10.0)
}

/// Basal metabolic rate (Harris-Benedict, revised).
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> Result<f64> {
    check_body(weight_kg, height_cm)?;
    if age_years == 0 {
        return Err(PlannerError::InvalidInput(
            "age must be positive".to_string(),
        ));
    }

    let age = age_years as f64;
    Ok(match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    })
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtremelyActive => 1.9,
    }
}

/// Rounded daily calorie target for a profile.
pub fn daily_calorie_target(profile: &HealthProfile) -> Result<i32> {
    let base = bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    )?;
    let maintenance = base * activity_multiplier(profile.activity_level);

    let target = match profile.goal {
        WeightGoal::Lose => maintenance - GOAL_ADJUSTMENT_KCAL,
        WeightGoal::Maintain => maintenance,
        WeightGoal::Gain => maintenance + GOAL_ADJUSTMENT_KCAL,
    };

    Ok(target.round() as i32)
}

/// BMI, category, BMR and calorie target in one pass.
pub fn summarize(profile: &HealthProfile) -> Result<ProfileSummary> {
    let bmi = bmi(profile.weight_kg, profile.height_cm)?;
    Ok(ProfileSummary {
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        bmr: bmr(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
        )?,
        daily_calories: daily_calorie_target(profile)?,
    })
}
