//! Linear recipe scaling
//!
//! Only ingredient weights scale. Price, bulk-cost fields, and per-100g
//! nutrition ratios stay as entered; downstream callers re-run the baker's
//! math calculator on the scaled recipe to refresh derived figures.

use rust_decimal::Decimal;
use shared::Recipe;

use crate::error::{EngineError, EngineResult};

/// Rescale every ingredient weight by `target_units / current_units`.
///
/// `current_units <= 0` has no meaningful ratio; the recipe is returned
/// unscaled. Use [`scale_recipe_checked`] to reject that input instead.
pub fn scale_recipe(recipe: &Recipe, current_units: Decimal, target_units: Decimal) -> Recipe {
    let mut scaled = recipe.clone();
    if current_units <= Decimal::ZERO {
        return scaled;
    }
    let factor = target_units / current_units;
    for ingredient in &mut scaled.ingredients {
        ingredient.weight *= factor;
    }
    scaled
}

/// Validating variant of [`scale_recipe`]
pub fn scale_recipe_checked(
    recipe: &Recipe,
    current_units: Decimal,
    target_units: Decimal,
) -> EngineResult<Recipe> {
    if current_units <= Decimal::ZERO {
        return Err(EngineError::validation(
            "current_units",
            "Current unit count must be positive",
        ));
    }
    if target_units < Decimal::ZERO {
        return Err(EngineError::validation(
            "target_units",
            "Target unit count cannot be negative",
        ));
    }
    Ok(scale_recipe(recipe, current_units, target_units))
}
