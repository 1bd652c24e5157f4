use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{RecipeError, Result};
use crate::models::Recipe;

/// Load recipes from a JSON file.
///
/// Accepts either a bare array of recipes or the `{"recipes": [...]}`
/// wrapper object used by the web store's data files. Recipes with zero
/// servings or negative quantities are rejected here, before any scaling
/// can trip over them.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;

    let recipes: Vec<Recipe> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(mut map) => match map.remove("recipes") {
            Some(inner) => serde_json::from_value(inner)?,
            None => {
                return Err(RecipeError::InvalidInput(
                    "recipe file object is missing a \"recipes\" array".to_string(),
                ));
            }
        },
        _ => {
            return Err(RecipeError::InvalidInput(
                "recipe file must contain an array or a \"recipes\" object".to_string(),
            ));
        }
    };

    if let Some(bad) = recipes.iter().find(|r| !r.is_valid()) {
        return Err(RecipeError::InvalidInput(format!(
            "recipe '{}' has invalid servings or ingredient quantities",
            bad.title
        )));
    }

    Ok(recipes)
}

/// Save recipes to a JSON file in the wrapper shape, pretty-printed.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let json = serde_json::to_string_pretty(&serde_json::json!({ "recipes": recipes }))?;
    fs::write(path, json)?;
    Ok(())
}
