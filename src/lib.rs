pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scaler;
pub mod state;

pub use error::{RecipeError, Result};
pub use models::{Ingredient, Recipe, ScaledIngredient};
