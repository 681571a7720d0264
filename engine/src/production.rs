//! Master-dough and production-sheet calculation
//!
//! Turns a per-recipe quantity map and the recipe catalog into the
//! consolidated ingredient list for a full day's mixing, plus the
//! per-loaf-type breakdown sheet the bench works from.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use shared::{IngredientType, Recipe};

use crate::aggregation::QuantityByRecipe;

/// One consolidated line of the master mixing list
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MasterIngredient {
    /// Total grams across every loaf in the run
    pub weight: Decimal,
    #[serde(rename = "type")]
    pub ingredient_type: IngredientType,
}

/// Total ingredient needs for a production run, keyed by ingredient name.
///
/// Each quantity is matched to the first catalog recipe with that display
/// name; names with no catalog match are skipped rather than failing the
/// whole run. The type tag comes from the first occurrence of each
/// ingredient name.
pub fn calculate_master_dough(
    quantities: &QuantityByRecipe,
    recipes: &[Recipe],
) -> BTreeMap<String, MasterIngredient> {
    let mut master: BTreeMap<String, MasterIngredient> = BTreeMap::new();

    for (recipe_name, &quantity) in quantities {
        let Some(recipe) = recipes.iter().find(|r| &r.name == recipe_name) else {
            tracing::debug!(recipe = %recipe_name, "no catalog match, skipping");
            continue;
        };
        let batch = Decimal::from(quantity);
        for ingredient in &recipe.ingredients {
            let contribution = ingredient.weight * batch;
            master
                .entry(ingredient.name.clone())
                .and_modify(|line| line.weight += contribution)
                .or_insert(MasterIngredient {
                    weight: contribution,
                    ingredient_type: ingredient.ingredient_type,
                });
        }
    }

    master
}

/// Per-ingredient requirement within one loaf type's batch
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRequirement {
    pub name: String,
    pub total_weight: Decimal,
}

/// Batch sheet for one loaf type
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoafBreakdown {
    pub quantity: u32,
    pub ingredients: Vec<IngredientRequirement>,
}

/// Per-loaf-type batch sheets: how many of each loaf, and the scaled weight
/// of every ingredient for that batch. Unmatched names are skipped, same as
/// the master list.
pub fn loaf_breakdown(
    quantities: &QuantityByRecipe,
    recipes: &[Recipe],
) -> BTreeMap<String, LoafBreakdown> {
    let mut breakdown = BTreeMap::new();

    for (recipe_name, &quantity) in quantities {
        let Some(recipe) = recipes.iter().find(|r| &r.name == recipe_name) else {
            continue;
        };
        let batch = Decimal::from(quantity);
        breakdown.insert(
            recipe_name.clone(),
            LoafBreakdown {
                quantity,
                ingredients: recipe
                    .ingredients
                    .iter()
                    .map(|ing| IngredientRequirement {
                        name: ing.name.clone(),
                        total_weight: ing.weight * batch,
                    })
                    .collect(),
            },
        );
    }

    breakdown
}
