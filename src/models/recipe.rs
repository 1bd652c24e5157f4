use serde::{Deserialize, Serialize};

use crate::models::Ingredient;

/// A recipe with its ingredient list calibrated to `servings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub servings: u32,

    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Basic validation: positive servings and non-negative quantities.
    pub fn is_valid(&self) -> bool {
        self.servings > 0 && self.ingredients.iter().all(|i| i.quantity >= 0.0)
    }

    /// Canonical key for lookups (lowercase title).
    pub fn key(&self) -> String {
        self.title.to_lowercase()
    }
}
