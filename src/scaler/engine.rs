use std::collections::BTreeSet;

use serde_json::Value;

use crate::error::{RecipeError, Result};
use crate::models::{Ingredient, ScaledIngredient};
use crate::scaler::constants::*;

/// Scale a single quantity from one serving count to another.
///
/// Exact rational scaling; display rounding happens in [`format_quantity`].
pub fn scale_quantity(
    original_quantity: f64,
    original_servings: f64,
    new_servings: f64,
) -> Result<f64> {
    if original_servings <= 0.0 || new_servings <= 0.0 {
        return Err(RecipeError::InvalidServings(format!(
            "{} -> {}",
            original_servings, new_servings
        )));
    }

    if original_quantity < 0.0 {
        return Err(RecipeError::InvalidQuantity(original_quantity));
    }

    let scaling_factor = new_servings / original_servings;
    Ok(original_quantity * scaling_factor)
}

/// Result of a unit-threshold adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitAdjustment {
    pub quantity: f64,
    pub unit: String,
}

/// Step a quantity up to a coarser unit once it reaches the threshold for
/// its current unit.
///
/// Applies at most one conversion (5000 ml becomes 5 liter, never further).
/// Unknown units and below-threshold quantities pass through unchanged, unit
/// casing preserved. Lookup is case-insensitive.
pub fn adjust_units(quantity: f64, unit: &str) -> UnitAdjustment {
    let conversion = UNIT_CONVERSIONS
        .iter()
        .find(|c| c.unit.eq_ignore_ascii_case(unit));

    if let Some(c) = conversion {
        if quantity >= c.threshold {
            return UnitAdjustment {
                quantity: quantity * c.factor,
                unit: c.target.to_string(),
            };
        }
    }

    UnitAdjustment {
        quantity,
        unit: unit.to_string(),
    }
}

/// Render a quantity as a compact kitchen-friendly string.
///
/// Sub-measurable amounts become "pinch", fractional parts snap to common
/// kitchen fractions ("1 1/3"), and larger values get progressively fewer
/// decimal places.
pub fn format_quantity(quantity: f64) -> String {
    if quantity == 0.0 {
        return "0".to_string();
    }

    if quantity < PINCH_THRESHOLD {
        return "pinch".to_string();
    }

    let whole = quantity.floor();
    let decimal = quantity - whole;

    // First fraction within tolerance wins; table order is the tie-break.
    let matching = FRACTIONS
        .iter()
        .find(|f| (decimal - f.decimal).abs() < FRACTION_TOLERANCE);

    if let Some(fraction) = matching {
        if whole == 0.0 {
            return fraction.display.to_string();
        }
        return format!("{} {}", whole as u64, fraction.display);
    }

    if decimal == 0.0 {
        return format!("{}", whole as u64);
    }

    if quantity < 10.0 {
        return trim_trailing_zeros(format!("{quantity:.2}"));
    }

    if quantity < 100.0 {
        return trim_trailing_zeros(format!("{quantity:.1}"));
    }

    format!("{}", quantity.round() as u64)
}

fn trim_trailing_zeros(formatted: String) -> String {
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Scale one ingredient: scale the quantity, adjust the unit, format.
///
/// The returned value keeps the unscaled quantity and unit for "was X"
/// annotations in the rendered list.
pub fn scale_ingredient(
    ingredient: &Ingredient,
    original_servings: f64,
    new_servings: f64,
) -> Result<ScaledIngredient> {
    let scaled = scale_quantity(ingredient.quantity, original_servings, new_servings)?;
    let adjusted = adjust_units(scaled, &ingredient.unit);

    Ok(ScaledIngredient {
        name: ingredient.name.clone(),
        formatted_quantity: format_quantity(adjusted.quantity),
        quantity: adjusted.quantity,
        unit: adjusted.unit,
        original_quantity: ingredient.quantity,
        original_unit: ingredient.unit.clone(),
    })
}

/// Scale a full ingredient list, preserving order. The first failing
/// ingredient aborts the whole call.
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    original_servings: f64,
    new_servings: f64,
) -> Result<Vec<ScaledIngredient>> {
    ingredients
        .iter()
        .map(|ingredient| scale_ingredient(ingredient, original_servings, new_servings))
        .collect()
}

/// Scale an ingredient list supplied as untyped JSON.
///
/// Guards the shape at the boundary: anything other than a JSON array is
/// rejected as `InvalidInput` before any scaling happens.
pub fn scale_ingredients_value(
    value: &Value,
    original_servings: f64,
    new_servings: f64,
) -> Result<Vec<ScaledIngredient>> {
    let items = value
        .as_array()
        .ok_or_else(|| RecipeError::InvalidInput("ingredients must be an array".to_string()))?;

    let ingredients = items
        .iter()
        .map(|item| serde_json::from_value(item.clone()))
        .collect::<std::result::Result<Vec<Ingredient>, _>>()?;

    scale_ingredients(&ingredients, original_servings, new_servings)
}

/// Suggested serving sizes for a recipe: the original, its half and double,
/// and the common sizes, deduplicated and ascending.
pub fn serving_suggestions(original_servings: u32) -> Vec<u32> {
    let mut suggestions = BTreeSet::new();

    suggestions.insert(original_servings);
    suggestions.insert((original_servings / 2).max(1));
    // Saturate near the u32 ceiling rather than overflow.
    suggestions.insert(original_servings.saturating_mul(2));
    suggestions.extend(COMMON_SERVINGS);

    suggestions.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, quantity: f64, unit: &str) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_scale_quantity_linear() {
        assert_eq!(scale_quantity(2.0, 4.0, 8.0).unwrap(), 4.0);
        assert_eq!(scale_quantity(2.0, 4.0, 2.0).unwrap(), 1.0);
        assert_eq!(scale_quantity(0.0, 4.0, 8.0).unwrap(), 0.0);
    }

    #[test]
    fn test_scale_quantity_identity() {
        for servings in [1.0, 3.0, 7.0, 100.0] {
            assert_eq!(scale_quantity(2.5, servings, servings).unwrap(), 2.5);
        }
    }

    #[test]
    fn test_scale_quantity_rejects_bad_servings() {
        assert!(matches!(
            scale_quantity(5.0, 0.0, 4.0),
            Err(RecipeError::InvalidServings(_))
        ));
        assert!(matches!(
            scale_quantity(5.0, 4.0, 0.0),
            Err(RecipeError::InvalidServings(_))
        ));
        assert!(matches!(
            scale_quantity(5.0, -1.0, 4.0),
            Err(RecipeError::InvalidServings(_))
        ));
    }

    #[test]
    fn test_scale_quantity_rejects_negative_quantity() {
        assert!(matches!(
            scale_quantity(-1.0, 4.0, 4.0),
            Err(RecipeError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_adjust_units_above_threshold() {
        let adjusted = adjust_units(4.0, "tsp");
        assert_eq!(adjusted.unit, "tbsp");
        assert!((adjusted.quantity - 4.0 / 3.0).abs() < 1e-9);

        let adjusted = adjust_units(1500.0, "ml");
        assert_eq!(adjusted.unit, "liter");
        assert!((adjusted.quantity - 1.5).abs() < 1e-9);

        let adjusted = adjust_units(24.0, "oz");
        assert_eq!(adjusted.unit, "lb");
        assert!((adjusted.quantity - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_units_below_threshold() {
        let adjusted = adjust_units(2.0, "tsp");
        assert_eq!(adjusted.unit, "tsp");
        assert_eq!(adjusted.quantity, 2.0);
    }

    #[test]
    fn test_adjust_units_at_threshold() {
        // Threshold is inclusive: exactly 3 tsp becomes 1 tbsp.
        let adjusted = adjust_units(3.0, "tsp");
        assert_eq!(adjusted.unit, "tbsp");
        assert!((adjusted.quantity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_units_case_insensitive() {
        let adjusted = adjust_units(20.0, "Tbsp");
        assert_eq!(adjusted.unit, "cup");
        assert!((adjusted.quantity - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_adjust_units_unknown_unit_passes_through() {
        let adjusted = adjust_units(500.0, "cloves");
        assert_eq!(adjusted.unit, "cloves");
        assert_eq!(adjusted.quantity, 500.0);
    }

    #[test]
    fn test_adjust_units_single_step_only() {
        // 5000 ml becomes 5 liter, not re-converted despite liter's own rule.
        let adjusted = adjust_units(5000.0, "ml");
        assert_eq!(adjusted.unit, "liter");
        assert_eq!(adjusted.quantity, 5.0);
    }

    #[test]
    fn test_adjust_units_liter_identity() {
        let adjusted = adjust_units(12.0, "liter");
        assert_eq!(adjusted.unit, "liter");
        assert_eq!(adjusted.quantity, 12.0);
    }

    #[test]
    fn test_format_quantity_zero_and_pinch() {
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(0.03), "pinch");
        assert_eq!(format_quantity(0.0624), "pinch");
    }

    #[test]
    fn test_format_quantity_fractions() {
        assert_eq!(format_quantity(0.125), "1/8");
        assert_eq!(format_quantity(0.25), "1/4");
        assert_eq!(format_quantity(0.5), "1/2");
        assert_eq!(format_quantity(0.75), "3/4");
        assert_eq!(format_quantity(1.333), "1 1/3");
        assert_eq!(format_quantity(2.667), "2 2/3");
        // Fraction snapping runs before decimal rendering at any magnitude.
        assert_eq!(format_quantity(2.5), "2 1/2");
        assert_eq!(format_quantity(15.75), "15 3/4");
    }

    #[test]
    fn test_format_quantity_fraction_tolerance() {
        // Within 0.05 of 1/4 on either side.
        assert_eq!(format_quantity(0.22), "1/4");
        assert_eq!(format_quantity(0.29), "1/4");
        // 0.39 falls outside every fraction window.
        assert_eq!(format_quantity(0.39), "0.39");
    }

    #[test]
    fn test_format_quantity_first_fraction_wins() {
        // 0.706 sits within tolerance of both 2/3 and 3/4; 2/3 is listed
        // first, so it wins.
        assert_eq!(format_quantity(0.706), "2/3");
    }

    #[test]
    fn test_format_quantity_integers() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(128.0), "128");
    }

    #[test]
    fn test_format_quantity_decimals() {
        assert_eq!(format_quantity(2.44), "2.44");
        assert_eq!(format_quantity(1.07), "1.07");
        assert_eq!(format_quantity(15.9), "15.9");
        assert_eq!(format_quantity(128.4), "128");
    }

    #[test]
    fn test_scale_ingredient_composes() {
        let milk = ingredient("milk", 16.0, "oz");
        let scaled = scale_ingredient(&milk, 4.0, 8.0).unwrap();

        // 32 oz crosses the threshold and becomes 2 lb.
        assert_eq!(scaled.unit, "lb");
        assert_eq!(scaled.quantity, 2.0);
        assert_eq!(scaled.formatted_quantity, "2");
        assert_eq!(scaled.original_quantity, 16.0);
        assert_eq!(scaled.original_unit, "oz");
    }

    #[test]
    fn test_scale_ingredient_propagates_errors() {
        let salt = ingredient("salt", 1.0, "tsp");
        assert!(matches!(
            scale_ingredient(&salt, 0.0, 4.0),
            Err(RecipeError::InvalidServings(_))
        ));
    }

    #[test]
    fn test_scale_ingredients_preserves_order() {
        let list = vec![
            ingredient("flour", 2.0, "cup"),
            ingredient("sugar", 0.75, "cup"),
            ingredient("flour", 2.0, "cup"),
        ];

        let scaled = scale_ingredients(&list, 4.0, 8.0).unwrap();
        assert_eq!(scaled.len(), 3);
        assert_eq!(scaled[0].name, "flour");
        assert_eq!(scaled[1].name, "sugar");
        assert_eq!(scaled[2].name, "flour");
    }

    #[test]
    fn test_scale_ingredients_value_rejects_non_array() {
        let value = serde_json::json!("not an array");
        assert!(matches!(
            scale_ingredients_value(&value, 4.0, 8.0),
            Err(RecipeError::InvalidInput(_))
        ));

        let value = serde_json::json!({"name": "flour", "quantity": 2, "unit": "cup"});
        assert!(matches!(
            scale_ingredients_value(&value, 4.0, 8.0),
            Err(RecipeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_scale_ingredients_value_accepts_array() {
        let value = serde_json::json!([
            {"name": "flour", "quantity": 2.0, "unit": "cup"},
            {"name": "eggs", "quantity": 2.0}
        ]);

        let scaled = scale_ingredients_value(&value, 4.0, 6.0).unwrap();
        assert_eq!(scaled.len(), 2);
        assert_eq!(scaled[0].formatted_quantity, "3");
        assert_eq!(scaled[1].unit, "");
    }

    #[test]
    fn test_serving_suggestions_common_case() {
        // Half (2) and double (8) already sit in the common set.
        assert_eq!(serving_suggestions(4), vec![1, 2, 4, 6, 8, 10, 12]);
    }

    #[test]
    fn test_serving_suggestions_includes_derived_sizes() {
        assert_eq!(serving_suggestions(6), vec![1, 2, 3, 4, 6, 8, 10, 12]);
        assert_eq!(serving_suggestions(5), vec![1, 2, 4, 5, 6, 8, 10, 12]);
    }

    #[test]
    fn test_serving_suggestions_small_original() {
        // Half of 1 floors to 0 and is clamped up to 1.
        let suggestions = serving_suggestions(1);
        assert_eq!(suggestions[0], 1);
        assert!(suggestions.contains(&2));
    }

    #[test]
    fn test_serving_suggestions_sorted_unique() {
        for n in 1..50 {
            let suggestions = serving_suggestions(n);
            assert!(suggestions.contains(&n));
            assert!(suggestions.windows(2).all(|w| w[0] < w[1]));
        }

        // Doubling saturates near the u32 ceiling instead of overflowing.
        let suggestions = serving_suggestions(u32::MAX - 1);
        assert!(suggestions.contains(&(u32::MAX - 1)));
        assert!(suggestions.contains(&u32::MAX));
        assert!(suggestions.windows(2).all(|w| w[0] < w[1]));
    }
}
