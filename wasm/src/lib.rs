//! WebAssembly module for the Hearth & Crumb Bakery Platform
//!
//! Provides client-side computation for:
//! - Recipe calculation on every editor keystroke
//! - Recipe scaling
//! - Bake-date order aggregation
//! - Master-dough list generation
//!
//! All structured data crosses the boundary as JSON strings; malformed
//! input surfaces as a `JsValue` error message for the UI to display.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

use bakery_engine::{
    aggregate_orders, calculate_bakers_math, calculate_master_dough, decompose_levain,
    scale_recipe, BuiltinNutritionTable, EngineConfig, QuantityByRecipe,
};
use shared::{Order, Recipe};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Calculate baker's percentages, hydration, nutrition, cost, and margin
/// for a recipe, using the built-in nutrition table as fallback
#[wasm_bindgen]
pub fn calculate_recipe(recipe_json: &str) -> Result<String, JsValue> {
    let recipe: Recipe = serde_json::from_str(recipe_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid recipe JSON: {}", e)))?;

    let calculated = calculate_bakers_math(
        &recipe,
        &BuiltinNutritionTable::default(),
        &EngineConfig::default(),
    );

    serde_json::to_string(&calculated)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Scale every ingredient weight of a recipe by `target / current` units
#[wasm_bindgen]
pub fn scale_recipe_json(
    recipe_json: &str,
    current_units: f64,
    target_units: f64,
) -> Result<String, JsValue> {
    let recipe: Recipe = serde_json::from_str(recipe_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid recipe JSON: {}", e)))?;

    let current = Decimal::try_from(current_units).unwrap_or(Decimal::ZERO);
    let target = Decimal::try_from(target_units).unwrap_or(Decimal::ZERO);
    let scaled = scale_recipe(&recipe, current, target);

    serde_json::to_string(&scaled)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Aggregate order quantities by recipe name for a bake date (YYYY-MM-DD)
#[wasm_bindgen]
pub fn aggregate_orders_json(orders_json: &str, bake_date: &str) -> Result<String, JsValue> {
    let orders: Vec<Order> = serde_json::from_str(orders_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid orders JSON: {}", e)))?;
    let date = NaiveDate::parse_from_str(bake_date, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid bake date: {}", e)))?;

    let quantities = aggregate_orders(&orders, date);
    serde_json::to_string(&quantities)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Consolidated master-dough ingredient list for aggregated quantities
#[wasm_bindgen]
pub fn master_dough_json(quantities_json: &str, recipes_json: &str) -> Result<String, JsValue> {
    let quantities: QuantityByRecipe = serde_json::from_str(quantities_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid quantities JSON: {}", e)))?;
    let recipes: Vec<Recipe> = serde_json::from_str(recipes_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid recipes JSON: {}", e)))?;

    let master = calculate_master_dough(&quantities, &recipes);
    serde_json::to_string(&master)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Flour portion of a levain at the given hydration ratio
#[wasm_bindgen]
pub fn levain_flour_portion(levain_weight: f64, hydration: f64) -> f64 {
    if levain_weight <= 0.0 || hydration <= -1.0 {
        return 0.0;
    }
    levain_weight / (1.0 + hydration)
}

/// True hydration from totals; 0 when there is no flour
#[wasm_bindgen]
pub fn true_hydration(total_water: f64, total_flour: f64) -> f64 {
    if total_flour <= 0.0 {
        return 0.0;
    }
    total_water / total_flour
}

/// Levain flour/water split as a formatted "flour/water" gram string for
/// quick display in the editor sidebar
#[wasm_bindgen]
pub fn levain_split_label(levain_weight: f64, hydration: f64) -> String {
    let weight = Decimal::try_from(levain_weight).unwrap_or(Decimal::ZERO);
    let h = Decimal::try_from(hydration).unwrap_or(Decimal::ZERO);
    let (flour, water) = decompose_levain(weight, h);
    format!("{:.0}g flour / {:.0}g water", flour, water)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levain_flour_portion() {
        // 100g levain at 100% hydration = 50g flour
        assert!((levain_flour_portion(100.0, 1.0) - 50.0).abs() < 0.001);
        // default 75% hydration: 100 / 1.75
        assert!((levain_flour_portion(100.0, 0.75) - 57.142857).abs() < 0.001);
        assert_eq!(levain_flour_portion(0.0, 1.0), 0.0);
    }

    #[test]
    fn test_true_hydration() {
        assert!((true_hydration(350.0, 500.0) - 0.7).abs() < 0.001);
        assert_eq!(true_hydration(350.0, 0.0), 0.0);
    }

    #[test]
    fn test_levain_split_label() {
        assert_eq!(levain_split_label(100.0, 1.0), "50g flour / 50g water");
    }
}
