use dialoguer::{Confirm, Input, Select};

use crate::error::{RecipeError, Result};
use crate::models::Recipe;
use crate::scaler::{serving_suggestions, MAX_SERVINGS, MIN_SERVINGS};
use crate::state::RecipeBook;

/// Resolve a recipe name to a recipe, trying an exact (case-insensitive)
/// match first and falling back to fuzzy matching with confirmation.
pub fn resolve_recipe<'a>(book: &'a RecipeBook, name: &str) -> Result<&'a Recipe> {
    if let Some(recipe) = book.get(name) {
        return Ok(recipe);
    }

    let candidates = book.fuzzy_find(name);

    if candidates.is_empty() {
        return Err(RecipeError::RecipeNotFound(name.to_string()));
    }

    if candidates.len() == 1 {
        let recipe = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", recipe.title))
            .default(true)
            .interact()?;

        if confirm {
            return Ok(recipe);
        }
        return Err(RecipeError::RecipeNotFound(name.to_string()));
    }

    // Multiple matches - let user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(r, _)| r.title.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(candidates[selection].0)
    } else {
        Err(RecipeError::RecipeNotFound(name.to_string()))
    }
}

/// Pick a recipe from the full list.
pub fn select_recipe<'a>(book: &'a RecipeBook) -> Result<&'a Recipe> {
    let recipes = book.all();
    let titles: Vec<String> = recipes
        .iter()
        .map(|r| format!("{} ({} servings)", r.title, r.servings))
        .collect();

    let selection = Select::new()
        .with_prompt("Which recipe?")
        .items(&titles)
        .default(0)
        .interact()?;

    Ok(recipes[selection])
}

/// Pick a target serving count: quick-select from the suggestion row, or a
/// custom value clamped to the interface bounds.
pub fn prompt_target_servings(original_servings: u32) -> Result<u32> {
    let suggestions = serving_suggestions(original_servings);

    let mut options: Vec<String> = suggestions
        .iter()
        .map(|s| {
            if *s == original_servings {
                format!("{} (original)", s)
            } else {
                s.to_string()
            }
        })
        .collect();
    options.push("Custom".to_string());

    let default = suggestions
        .iter()
        .position(|s| *s == original_servings)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Scale to how many servings?")
        .items(&options)
        .default(default)
        .interact()?;

    if selection < suggestions.len() {
        return Ok(suggestions[selection]);
    }

    let input: String = Input::new()
        .with_prompt(format!("Servings ({}-{})", MIN_SERVINGS, MAX_SERVINGS))
        .default(original_servings.to_string())
        .interact_text()?;

    let value: u32 = input
        .trim()
        .parse()
        .map_err(|_| RecipeError::InvalidInput("Invalid number".to_string()))?;

    // The interface clamps; the engine itself only requires > 0.
    Ok(value.clamp(MIN_SERVINGS, MAX_SERVINGS))
}
