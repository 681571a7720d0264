//! Recipe models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Ingredient;
use crate::types::{FlavorProfile, RecipeCategory};

/// Levain culture details for a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevainDetails {
    /// Hydration as a ratio, e.g. 1.0 for a 100% hydration starter
    pub hydration: Decimal,
}

/// A saleable product formula as the baker entered it
///
/// Persisted by the hosted store; the engine never mutates a recipe, it
/// derives a `CalculatedRecipe` from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub category: RecipeCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_profile: Option<FlavorProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size_grams: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levain_details: Option<LevainDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<Decimal>,
    #[serde(default)]
    pub is_hidden: bool,
}

impl Recipe {
    /// Minimal recipe with just a name, price, and formula
    pub fn new(name: impl Into<String>, price: Decimal, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: RecipeCategory::default(),
            flavor_profile: None,
            description: None,
            price,
            image_url: None,
            images: Vec::new(),
            ingredients,
            serving_size_grams: None,
            levain_details: None,
            instructions: None,
            average_rating: None,
            is_hidden: false,
        }
    }

    /// Sum of all ingredient weights in grams
    pub fn total_weight(&self) -> Decimal {
        self.ingredients.iter().map(|i| i.weight).sum()
    }
}
