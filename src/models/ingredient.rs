use serde::{Deserialize, Serialize};

/// A single recipe ingredient as stored in the recipe file.
///
/// The unit may be empty for countable items ("2 eggs").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,

    pub quantity: f64,

    #[serde(default)]
    pub unit: String,
}

/// An ingredient after scaling to a new serving count.
///
/// Carries the original quantity and unit so views can render a
/// "(was 2 cup)" annotation next to the scaled value. Built fresh on
/// every scale call and never written back to the recipe file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    pub name: String,

    pub quantity: f64,

    pub unit: String,

    pub formatted_quantity: String,

    pub original_quantity: f64,

    pub original_unit: String,
}
