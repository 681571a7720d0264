//! Tests for master-dough and production-sheet calculation

use rust_decimal::Decimal;
use std::str::FromStr;

use bakery_engine::{calculate_master_dough, loaf_breakdown, QuantityByRecipe};
use shared::{Ingredient, IngredientType, Recipe};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn ingredient(name: &str, weight: &str, ingredient_type: IngredientType) -> Ingredient {
    Ingredient::new(name, dec(weight), ingredient_type)
}

fn quantities(entries: &[(&str, u32)]) -> QuantityByRecipe {
    entries
        .iter()
        .map(|(name, qty)| (name.to_string(), *qty))
        .collect()
}

fn country_loaf() -> Recipe {
    Recipe::new(
        "Country Loaf",
        dec("9.50"),
        vec![
            ingredient("Bread Flour", "500", IngredientType::Flour),
            ingredient("Water", "350", IngredientType::Water),
            ingredient("Salt", "10", IngredientType::Salt),
        ],
    )
}

fn rye_loaf() -> Recipe {
    Recipe::new(
        "Rye Loaf",
        dec("10.50"),
        vec![
            ingredient("Rye Flour", "300", IngredientType::Flour),
            ingredient("Bread Flour", "200", IngredientType::Flour),
            ingredient("Water", "360", IngredientType::Water),
            ingredient("Salt", "11", IngredientType::Salt),
        ],
    )
}

// ============================================================================
// Master Dough
// ============================================================================

mod master_dough {
    use super::*;

    #[test]
    fn multiplies_ingredient_weights_by_quantity() {
        let catalog = vec![country_loaf()];
        let master = calculate_master_dough(&quantities(&[("Country Loaf", 7)]), &catalog);

        let flour = master.get("Bread Flour").unwrap();
        assert_eq!(flour.weight, dec("3500"));
        assert_eq!(flour.ingredient_type, IngredientType::Flour);
        assert_eq!(master.get("Water").unwrap().weight, dec("2450"));
        assert_eq!(master.get("Salt").unwrap().weight, dec("70"));
    }

    #[test]
    fn shared_ingredients_accumulate_across_recipes() {
        let catalog = vec![country_loaf(), rye_loaf()];
        let master = calculate_master_dough(
            &quantities(&[("Country Loaf", 2), ("Rye Loaf", 3)]),
            &catalog,
        );

        // 2 * 500 from the country loaf plus 3 * 200 from the rye
        assert_eq!(master.get("Bread Flour").unwrap().weight, dec("1600"));
        assert_eq!(master.get("Rye Flour").unwrap().weight, dec("900"));
        // 2 * 350 + 3 * 360
        assert_eq!(master.get("Water").unwrap().weight, dec("1780"));
    }

    #[test]
    fn unmatched_recipe_names_are_silently_skipped() {
        let catalog = vec![country_loaf()];
        let master = calculate_master_dough(
            &quantities(&[("Country Loaf", 2), ("Retired Baguette", 5)]),
            &catalog,
        );

        assert_eq!(master.get("Bread Flour").unwrap().weight, dec("1000"));
        assert_eq!(master.len(), 3);
    }

    #[test]
    fn empty_quantities_yield_empty_list() {
        let catalog = vec![country_loaf()];
        assert!(calculate_master_dough(&QuantityByRecipe::new(), &catalog).is_empty());
    }

    #[test]
    fn first_catalog_match_wins_for_duplicate_names() {
        let mut small = country_loaf();
        small.ingredients[0].weight = dec("400");
        let catalog = vec![small, country_loaf()];

        let master = calculate_master_dough(&quantities(&[("Country Loaf", 1)]), &catalog);
        assert_eq!(master.get("Bread Flour").unwrap().weight, dec("400"));
    }

    #[test]
    fn type_tag_comes_from_first_occurrence() {
        // "Honey" is an inclusion in the first recipe processed and typed
        // as water in the second; the consolidated line keeps the first tag.
        let loaf_a = Recipe::new(
            "A Loaf",
            dec("8.00"),
            vec![ingredient("Honey", "40", IngredientType::Inclusion)],
        );
        let loaf_b = Recipe::new(
            "B Loaf",
            dec("8.00"),
            vec![ingredient("Honey", "60", IngredientType::Water)],
        );

        let master = calculate_master_dough(
            &quantities(&[("A Loaf", 1), ("B Loaf", 1)]),
            &[loaf_a, loaf_b],
        );

        let honey = master.get("Honey").unwrap();
        assert_eq!(honey.weight, dec("100"));
        // BTreeMap iteration visits "A Loaf" first
        assert_eq!(honey.ingredient_type, IngredientType::Inclusion);
    }
}

// ============================================================================
// Loaf Breakdown Sheets
// ============================================================================

mod breakdown {
    use super::*;

    #[test]
    fn one_sheet_per_loaf_type() {
        let catalog = vec![country_loaf(), rye_loaf()];
        let sheets = loaf_breakdown(
            &quantities(&[("Country Loaf", 7), ("Rye Loaf", 3)]),
            &catalog,
        );

        let country = sheets.get("Country Loaf").unwrap();
        assert_eq!(country.quantity, 7);
        let flour = country
            .ingredients
            .iter()
            .find(|i| i.name == "Bread Flour")
            .unwrap();
        assert_eq!(flour.total_weight, dec("3500"));

        let rye = sheets.get("Rye Loaf").unwrap();
        assert_eq!(rye.quantity, 3);
        assert_eq!(rye.ingredients.len(), 4);
    }

    #[test]
    fn unmatched_names_are_skipped() {
        let sheets = loaf_breakdown(&quantities(&[("Ghost Loaf", 2)]), &[country_loaf()]);
        assert!(sheets.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let sheets = loaf_breakdown(&quantities(&[("Country Loaf", 1)]), &[country_loaf()]);
        let value = serde_json::to_value(&sheets).unwrap();
        assert!(value["Country Loaf"]["ingredients"][0]["totalWeight"].is_string());
    }
}
