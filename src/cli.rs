use clap::{Parser, Subcommand};

/// RecipeScaler — scale recipe ingredient lists between serving sizes.
#[derive(Parser, Debug)]
#[command(name = "recipe_scaler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipes JSON file.
    #[arg(short, long, default_value = "recipes.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scale a recipe's ingredients to a new serving count.
    Scale {
        /// Recipe title (exact or fuzzy match). Prompts when omitted.
        recipe: Option<String>,

        /// Target serving count. Prompts when omitted.
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        servings: Option<u32>,

        /// Scale an inline JSON array of ingredients instead of a stored
        /// recipe, e.g. '[{"name":"flour","quantity":2,"unit":"cup"}]'.
        #[arg(long, value_name = "JSON", conflicts_with = "recipe")]
        ingredients: Option<String>,

        /// Original serving count for --ingredients input.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        from: u32,

        /// Print the scaled ingredients as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List all recipes in the file.
    List,

    /// Show a recipe's full details.
    Show {
        /// Recipe title (exact or fuzzy match).
        recipe: String,
    },

    /// Print suggested serving sizes for a recipe of the given servings.
    Suggest {
        /// Original serving count.
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        servings: u32,
    },
}
