pub mod prompts;
pub mod render;

pub use prompts::{prompt_health_profile, prompt_yes_no, resolve_restrictions};
pub use render::{
    display_grocery_list, display_plan, display_profile, display_shopping, display_weight_progress,
};
