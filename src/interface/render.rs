use crate::models::{Recipe, ScaledIngredient};

/// Display a scaled ingredient list with "was X" annotations when the
/// target serving count differs from the original.
pub fn display_scaled_ingredients(
    title: &str,
    scaled: &[ScaledIngredient],
    original_servings: u32,
    new_servings: u32,
) {
    println!();
    println!(
        "=== {} ({} -> {} servings) ===",
        title, original_servings, new_servings
    );
    println!();

    if scaled.is_empty() {
        println!("(no ingredients)");
        println!();
        return;
    }

    // Align names on the widest quantity/unit column
    let amounts: Vec<String> = scaled.iter().map(amount_label).collect();
    let max_amount_len = amounts.iter().map(|a| a.len()).max().unwrap_or(0);

    for (ingredient, amount) in scaled.iter().zip(&amounts) {
        let annotation = if new_servings != original_servings {
            format!(
                "  (was {} {})",
                ingredient.original_quantity, ingredient.original_unit
            )
        } else {
            String::new()
        };

        println!(
            "  {:<width$}  {}{}",
            amount,
            ingredient.name,
            annotation.trim_end(),
            width = max_amount_len
        );
    }

    println!();
}

fn amount_label(ingredient: &ScaledIngredient) -> String {
    if ingredient.unit.is_empty() {
        ingredient.formatted_quantity.clone()
    } else {
        format!("{} {}", ingredient.formatted_quantity, ingredient.unit)
    }
}

/// Display a full recipe: ingredients at its original servings, then steps.
pub fn display_recipe(recipe: &Recipe) {
    println!();
    println!("=== {} ({} servings) ===", recipe.title, recipe.servings);

    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }

    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        if ingredient.unit.is_empty() {
            println!("  {} {}", ingredient.quantity, ingredient.name);
        } else {
            println!(
                "  {} {} {}",
                ingredient.quantity, ingredient.unit, ingredient.name
            );
        }
    }

    if !recipe.instructions.is_empty() {
        println!();
        println!("Instructions:");
        for (i, step) in recipe.instructions.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }

    println!();
}

/// Display a one-line-per-recipe listing.
pub fn display_recipe_list(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("(no recipes)");
        return;
    }

    println!();
    println!("=== Recipes ({}) ===", recipes.len());
    println!();

    let max_title_len = recipes.iter().map(|r| r.title.len()).max().unwrap_or(10);

    for recipe in recipes {
        println!(
            "  {:<width$}  {} servings, {} ingredients",
            recipe.title,
            recipe.servings,
            recipe.ingredients.len(),
            width = max_title_len
        );
    }

    println!();
}

/// Display the suggestion row for a serving count.
pub fn display_suggestions(original_servings: u32, suggestions: &[u32]) {
    let row: Vec<String> = suggestions.iter().map(|s| s.to_string()).collect();
    println!(
        "Suggested servings for a {}-serving recipe: {}",
        original_servings,
        row.join(", ")
    );
}
