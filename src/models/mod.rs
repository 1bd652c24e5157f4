pub mod ingredient;
pub mod recipe;

pub use ingredient::{Ingredient, ScaledIngredient};
pub use recipe::Recipe;
