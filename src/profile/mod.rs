pub mod calculations;
pub mod progress;

pub use calculations::{
    activity_multiplier, bmi, bmr, daily_calorie_target, summarize, BmiCategory, ProfileSummary,
};
pub use progress::{bmi_trend, weight_progress, BmiTrend, WeightProgress};
