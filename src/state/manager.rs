use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::models::Recipe;

/// Minimum similarity score for a fuzzy title match.
const FUZZY_CUTOFF: f64 = 0.7;

/// In-memory collection of recipes keyed by lowercase title.
pub struct RecipeBook {
    recipes: HashMap<String, Recipe>,
}

impl RecipeBook {
    /// Build a book from a list of recipes. Duplicate titles collapse to the
    /// last occurrence, matching the store's case-insensitive title keying.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut map = HashMap::new();
        for recipe in recipes {
            map.insert(recipe.key(), recipe);
        }
        Self { recipes: map }
    }

    /// Get a recipe by title (case-insensitive).
    pub fn get(&self, title: &str) -> Option<&Recipe> {
        self.recipes.get(&title.to_lowercase())
    }

    /// Find recipes whose titles are similar to the query, best match first.
    pub fn fuzzy_find(&self, query: &str) -> Vec<(&Recipe, f64)> {
        let query = query.to_lowercase();

        let mut candidates: Vec<(&Recipe, f64)> = self
            .recipes
            .values()
            .map(|r| (r, jaro_winkler(&r.key(), &query)))
            .filter(|(_, score)| *score > FUZZY_CUTOFF)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }

    /// All recipes sorted by title, for stable listings.
    pub fn all(&self) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.values().collect();
        recipes.sort_by(|a, b| a.title.cmp(&b.title));
        recipes
    }

    /// Count of recipes in the book.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the book has no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
