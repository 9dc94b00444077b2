pub mod constants;
pub mod filters;
pub mod generator;
pub mod nutrition;

pub use constants::*;
pub use filters::{is_known_restriction, suggest_restriction, DietaryFilter};
pub use generator::{
    generate, regenerate, scale_template, serving_multiplier, Generation, GenerationRequest,
    PlanWarning,
};
pub use nutrition::{macro_breakdown, plan_breakdown, progress_status, MacroBreakdown, ProgressStatus};
