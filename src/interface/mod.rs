pub mod prompts;
pub mod render;

pub use prompts::{prompt_target_servings, resolve_recipe, select_recipe};
pub use render::{
    display_recipe, display_recipe_list, display_scaled_ingredients, display_suggestions,
};
