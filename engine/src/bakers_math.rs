//! Baker's-percentage, hydration, nutrition, and margin calculation
//!
//! Baker's Percentage = (Ingredient Weight / Total Flour Weight) * 100.
//! Total flour includes the flour inside the levain, total water includes
//! the water inside the levain, which is what makes the hydration figure
//! "true" rather than nominal.

use rust_decimal::Decimal;
use serde::Serialize;

use shared::{validate_recipe, Ingredient, IngredientType, Recipe};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::nutrition::NutritionLookup;

/// Accumulated nutrition across a whole recipe or per serving
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTotals {
    pub calories: Decimal,
    pub protein: Decimal,
    pub carbs: Decimal,
    pub fat: Decimal,
}

/// A formula line annotated with its baker's percentage
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedIngredient {
    pub name: String,
    /// Weight in grams
    pub weight: Decimal,
    #[serde(rename = "type")]
    pub ingredient_type: IngredientType,
    /// Weight relative to total flour, as a percentage
    pub percentage: Decimal,
}

/// Derived view of a recipe
///
/// Never persisted as authoritative; always regenerable from the source
/// recipe plus current nutrition and cost data.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedRecipe {
    pub recipe: Recipe,
    /// Grams of flour, including the flour portion of the levain
    pub total_flour: Decimal,
    /// Grams of water, including the water portion of the levain
    pub total_water: Decimal,
    /// Total water over total flour, 0 for flourless recipes
    pub true_hydration: Decimal,
    pub ingredients: Vec<CalculatedIngredient>,
    pub total_nutrition: NutritionTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_per_serving: Option<NutritionTotals>,
    pub total_cost: Decimal,
    /// Percentage of the sale price left after ingredient cost, 0 when the
    /// recipe has no price
    pub profit_margin: Decimal,
}

/// Flour and water contributed by a levain of the given weight and hydration
///
/// Levain = Flour + Water and Water = Flour * Hydration, so
/// Flour = Levain / (1 + Hydration).
pub fn decompose_levain(levain_weight: Decimal, hydration: Decimal) -> (Decimal, Decimal) {
    let divisor = Decimal::ONE + hydration;
    // A hydration of -100% would zero the divisor; yield nothing instead of
    // panicking on malformed legacy data.
    if divisor <= Decimal::ZERO {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    let flour = levain_weight / divisor;
    (flour, levain_weight - flour)
}

/// Calculate baker's percentages, true hydration, nutrition, cost, and
/// margin for one recipe.
///
/// Degrades instead of failing: a recipe with no flour gets zero hydration
/// and zero percentages, missing nutrition or cost data contributes zero.
/// Use [`calculate_bakers_math_checked`] to reject malformed input instead.
pub fn calculate_bakers_math(
    recipe: &Recipe,
    nutrition: &dyn NutritionLookup,
    config: &EngineConfig,
) -> CalculatedRecipe {
    let mut recipe_flour = Decimal::ZERO;
    let mut recipe_water = Decimal::ZERO;
    let mut levain_weight = Decimal::ZERO;

    for ingredient in &recipe.ingredients {
        match ingredient.ingredient_type {
            IngredientType::Flour => recipe_flour += ingredient.weight,
            IngredientType::Water => recipe_water += ingredient.weight,
            IngredientType::Levain => levain_weight += ingredient.weight,
            // Salt and inclusions count toward percentages, cost, and
            // nutrition but not toward the flour/water totals.
            IngredientType::Salt | IngredientType::Inclusion => {}
        }
    }

    let levain_hydration = recipe
        .levain_details
        .as_ref()
        .map(|l| l.hydration)
        .unwrap_or(config.default_levain_hydration);
    let (flour_in_levain, water_in_levain) = decompose_levain(levain_weight, levain_hydration);

    let total_flour = recipe_flour + flour_in_levain;
    let total_water = recipe_water + water_in_levain;
    let true_hydration = if total_flour > Decimal::ZERO {
        total_water / total_flour
    } else {
        Decimal::ZERO
    };

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ing| CalculatedIngredient {
            name: ing.name.clone(),
            weight: ing.weight,
            ingredient_type: ing.ingredient_type,
            percentage: if total_flour > Decimal::ZERO {
                (ing.weight / total_flour) * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            },
        })
        .collect();

    let mut total_nutrition = NutritionTotals::default();
    for ingredient in &recipe.ingredients {
        let facts = ingredient
            .nutrition
            .clone()
            .or_else(|| nutrition.lookup(&ingredient.name))
            .unwrap_or_default();
        let portion = ingredient.weight / Decimal::ONE_HUNDRED;
        total_nutrition.calories += portion * facts.calories_per_100g;
        total_nutrition.protein += portion * facts.protein_per_100g;
        total_nutrition.carbs += portion * facts.carbs_per_100g;
        total_nutrition.fat += portion * facts.fat_per_100g;
    }

    let total_cost: Decimal = recipe.ingredients.iter().map(ingredient_cost).sum();

    let profit_margin = if recipe.price > Decimal::ZERO {
        ((recipe.price - total_cost) / recipe.price) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let total_weight = recipe.total_weight();
    let nutrition_per_serving = match recipe.serving_size_grams {
        Some(serving) if serving > Decimal::ZERO && total_weight > Decimal::ZERO => {
            let servings = total_weight / serving;
            Some(NutritionTotals {
                calories: total_nutrition.calories / servings,
                protein: total_nutrition.protein / servings,
                carbs: total_nutrition.carbs / servings,
                fat: total_nutrition.fat / servings,
            })
        }
        _ => None,
    };

    tracing::debug!(
        recipe = %recipe.name,
        %total_flour,
        %total_water,
        %true_hydration,
        %total_cost,
        "calculated baker's math"
    );

    CalculatedRecipe {
        recipe: recipe.clone(),
        total_flour,
        total_water,
        true_hydration,
        ingredients,
        total_nutrition,
        nutrition_per_serving,
        total_cost,
        profit_margin,
    }
}

/// Validating variant of [`calculate_bakers_math`]
pub fn calculate_bakers_math_checked(
    recipe: &Recipe,
    nutrition: &dyn NutritionLookup,
    config: &EngineConfig,
) -> EngineResult<CalculatedRecipe> {
    validate_recipe(recipe).map_err(|message| EngineError::validation("recipe", message))?;
    Ok(calculate_bakers_math(recipe, nutrition, config))
}

/// Cost of one formula line: bulk pack price prorated by weight when bulk
/// data is recorded, otherwise the legacy per-100g cost.
fn ingredient_cost(ingredient: &Ingredient) -> Decimal {
    match (ingredient.bulk_price, ingredient.bulk_weight) {
        (Some(bulk_price), Some(bulk_weight)) if bulk_weight > Decimal::ZERO => {
            (bulk_price / bulk_weight) * ingredient.weight
        }
        _ => {
            (ingredient.weight / Decimal::ONE_HUNDRED)
                * ingredient.cost_per_unit.unwrap_or(Decimal::ZERO)
        }
    }
}
