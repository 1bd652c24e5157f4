use clap::Parser;
use std::path::Path;

use recipe_scaler_rs::cli::{Cli, Command};
use recipe_scaler_rs::error::{RecipeError, Result};
use recipe_scaler_rs::interface::{
    display_recipe, display_recipe_list, display_scaled_ingredients, display_suggestions,
    prompt_target_servings, resolve_recipe, select_recipe,
};
use recipe_scaler_rs::scaler::{scale_ingredients, scale_ingredients_value, serving_suggestions};
use recipe_scaler_rs::state::{load_recipes, RecipeBook};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => cmd_scale(&cli.file, None, None, None, 1, false),
        Some(Command::Scale {
            recipe,
            servings,
            ingredients,
            from,
            json,
        }) => cmd_scale(&cli.file, recipe, servings, ingredients, from, json),
        Some(Command::List) => cmd_list(&cli.file),
        Some(Command::Show { recipe }) => cmd_show(&cli.file, &recipe),
        Some(Command::Suggest { servings }) => {
            display_suggestions(servings, &serving_suggestions(servings));
            Ok(())
        }
    }
}

/// Scale a stored recipe, or an inline ingredient list, to a target
/// serving count.
fn cmd_scale(
    file_path: &str,
    recipe_name: Option<String>,
    servings: Option<u32>,
    ingredients_json: Option<String>,
    from: u32,
    json: bool,
) -> Result<()> {
    // Inline mode bypasses the recipe file entirely.
    if let Some(raw) = ingredients_json {
        let target = servings.ok_or_else(|| {
            RecipeError::InvalidInput("--servings is required with --ingredients".to_string())
        })?;

        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let scaled = scale_ingredients_value(&value, from as f64, target as f64)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&scaled)?);
        } else {
            display_scaled_ingredients("Ingredients", &scaled, from, target);
        }
        return Ok(());
    }

    let book = match open_book(file_path)? {
        Some(book) => book,
        None => return Ok(()),
    };

    let recipe = match recipe_name {
        Some(name) => resolve_recipe(&book, &name)?,
        None => select_recipe(&book)?,
    };

    let target = match servings {
        Some(s) => s,
        None => prompt_target_servings(recipe.servings)?,
    };

    let scaled = scale_ingredients(&recipe.ingredients, recipe.servings as f64, target as f64)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scaled)?);
    } else {
        display_scaled_ingredients(&recipe.title, &scaled, recipe.servings, target);
    }

    Ok(())
}

/// List all recipes in the file.
fn cmd_list(file_path: &str) -> Result<()> {
    let book = match open_book(file_path)? {
        Some(book) => book,
        None => return Ok(()),
    };

    display_recipe_list(&book.all());
    Ok(())
}

/// Show a recipe's full details.
fn cmd_show(file_path: &str, recipe_name: &str) -> Result<()> {
    let book = match open_book(file_path)? {
        Some(book) => book,
        None => return Ok(()),
    };

    let recipe = resolve_recipe(&book, recipe_name)?;
    display_recipe(recipe);
    Ok(())
}

/// Load the recipe file into a book, reporting the common empty cases
/// instead of erroring.
fn open_book(file_path: &str) -> Result<Option<RecipeBook>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Recipe file not found: {}", file_path);
        eprintln!("Please ensure recipes.json exists in the current directory.");
        return Ok(None);
    }

    let recipes = load_recipes(path)?;
    let book = RecipeBook::new(recipes);

    if book.is_empty() {
        println!("No recipes in {}.", file_path);
        return Ok(None);
    }

    Ok(Some(book))
}
