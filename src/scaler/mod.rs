pub mod constants;
pub mod engine;

pub use constants::*;
pub use engine::{
    adjust_units, format_quantity, scale_ingredient, scale_ingredients, scale_ingredients_value,
    scale_quantity, serving_suggestions, UnitAdjustment,
};
