//! Ingredient and nutrition models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::IngredientType;

/// Nutrition facts per 100 grams of an ingredient
///
/// Looked up externally and optionally attached to an ingredient at
/// calculation time; immutable once attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    pub calories_per_100g: Decimal,
    pub protein_per_100g: Decimal,
    pub carbs_per_100g: Decimal,
    pub fat_per_100g: Decimal,
}

impl NutritionFacts {
    pub fn new(
        calories_per_100g: Decimal,
        protein_per_100g: Decimal,
        carbs_per_100g: Decimal,
        fat_per_100g: Decimal,
    ) -> Self {
        Self {
            calories_per_100g,
            protein_per_100g,
            carbs_per_100g,
            fat_per_100g,
        }
    }

    /// Zero facts, used when no nutrition data is available
    pub fn zero() -> Self {
        Self::default()
    }
}

/// One line of a recipe formula
///
/// Owned by exactly one recipe; it has no identity beyond its name and
/// position within that recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// Weight in grams
    pub weight: Decimal,
    #[serde(rename = "type")]
    pub ingredient_type: IngredientType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionFacts>,
    /// Fallback cost per 100g when no bulk pricing is recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_unit: Option<Decimal>,
    /// Price paid for the whole pack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_price: Option<Decimal>,
    /// Pack weight in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_weight: Option<Decimal>,
}

impl Ingredient {
    /// Plain ingredient with no nutrition or cost data attached
    pub fn new(name: impl Into<String>, weight: Decimal, ingredient_type: IngredientType) -> Self {
        Self {
            name: name.into(),
            weight,
            ingredient_type,
            nutrition: None,
            cost_per_unit: None,
            bulk_price: None,
            bulk_weight: None,
        }
    }
}
