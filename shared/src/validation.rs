//! Validation utilities for the Hearth & Crumb Bakery Platform
//!
//! The engine's hardened entry points wrap these into typed errors; legacy
//! callers that pre-validate in the UI can skip them.

use rust_decimal::Decimal;

use crate::models::{Ingredient, Order, OrderItem, PromoCode, Recipe, Subscription};
use crate::types::PromoType;

// ============================================================================
// Recipe Validations
// ============================================================================

/// Validate a single formula line
pub fn validate_ingredient(ingredient: &Ingredient) -> Result<(), &'static str> {
    if ingredient.name.trim().is_empty() {
        return Err("Ingredient name is required");
    }
    if ingredient.weight < Decimal::ZERO {
        return Err("Ingredient weight cannot be negative");
    }
    if let Some(cost) = ingredient.cost_per_unit {
        if cost < Decimal::ZERO {
            return Err("Ingredient cost cannot be negative");
        }
    }
    if let Some(bulk_price) = ingredient.bulk_price {
        if bulk_price < Decimal::ZERO {
            return Err("Bulk price cannot be negative");
        }
        match ingredient.bulk_weight {
            Some(w) if w > Decimal::ZERO => {}
            _ => return Err("Bulk pricing requires a positive bulk weight"),
        }
    }
    Ok(())
}

/// Validate a recipe before calculation or persistence
pub fn validate_recipe(recipe: &Recipe) -> Result<(), &'static str> {
    if recipe.name.trim().is_empty() {
        return Err("Recipe name is required");
    }
    if recipe.price < Decimal::ZERO {
        return Err("Recipe price cannot be negative");
    }
    if let Some(serving) = recipe.serving_size_grams {
        if serving <= Decimal::ZERO {
            return Err("Serving size must be positive");
        }
    }
    if let Some(levain) = &recipe.levain_details {
        if levain.hydration < Decimal::ZERO {
            return Err("Levain hydration cannot be negative");
        }
    }
    for ingredient in &recipe.ingredients {
        validate_ingredient(ingredient)?;
    }
    Ok(())
}

// ============================================================================
// Order Validations
// ============================================================================

/// Validate an order line item
pub fn validate_order_item(item: &OrderItem) -> Result<(), &'static str> {
    if item.name.trim().is_empty() {
        return Err("Order item name is required");
    }
    if item.quantity == 0 {
        return Err("Order item quantity must be positive");
    }
    if item.weight_grams < Decimal::ZERO {
        return Err("Order item weight cannot be negative");
    }
    Ok(())
}

/// Validate an order before aggregation or persistence
pub fn validate_order(order: &Order) -> Result<(), &'static str> {
    if order.customer_name.trim().is_empty() {
        return Err("Customer name is required");
    }
    if order.total_price < Decimal::ZERO {
        return Err("Order total cannot be negative");
    }
    if order.shipping_cost < Decimal::ZERO {
        return Err("Shipping cost cannot be negative");
    }
    for item in &order.items {
        validate_order_item(item)?;
    }
    Ok(())
}

/// Validate a subscription record
pub fn validate_subscription(subscription: &Subscription) -> Result<(), &'static str> {
    if subscription.recipe_name.trim().is_empty() {
        return Err("Subscription recipe name is required");
    }
    if subscription.quantity == 0 {
        return Err("Subscription quantity must be positive");
    }
    if subscription.price < Decimal::ZERO {
        return Err("Subscription price cannot be negative");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate a promo code definition
pub fn validate_promo_code(promo: &PromoCode) -> Result<(), &'static str> {
    if promo.code.trim().is_empty() {
        return Err("Promo code is required");
    }
    if promo.value < Decimal::ZERO {
        return Err("Promo value cannot be negative");
    }
    if promo.promo_type == PromoType::Percent && promo.value > Decimal::from(100) {
        return Err("Percent promo cannot exceed 100%");
    }
    Ok(())
}

/// Validate a review rating (1-5 stars)
pub fn validate_rating(rating: i32) -> Result<(), &'static str> {
    if !(1..=5).contains(&rating) {
        return Err("Rating must be between 1 and 5");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IngredientType;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn flour(weight: &str) -> Ingredient {
        Ingredient::new("Bread Flour", dec(weight), IngredientType::Flour)
    }

    // ========================================================================
    // Recipe Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_ingredient_valid() {
        assert!(validate_ingredient(&flour("450")).is_ok());
        assert!(validate_ingredient(&flour("0")).is_ok());
    }

    #[test]
    fn test_validate_ingredient_negative_weight() {
        assert!(validate_ingredient(&flour("-1")).is_err());
    }

    #[test]
    fn test_validate_ingredient_empty_name() {
        let ing = Ingredient::new("  ", dec("100"), IngredientType::Flour);
        assert!(validate_ingredient(&ing).is_err());
    }

    #[test]
    fn test_validate_ingredient_bulk_price_requires_bulk_weight() {
        let mut ing = flour("450");
        ing.bulk_price = Some(dec("12.50"));
        assert!(validate_ingredient(&ing).is_err());

        ing.bulk_weight = Some(dec("0"));
        assert!(validate_ingredient(&ing).is_err());

        ing.bulk_weight = Some(dec("1000"));
        assert!(validate_ingredient(&ing).is_ok());
    }

    #[test]
    fn test_validate_recipe_valid() {
        let recipe = Recipe::new("Country Loaf", dec("9.50"), vec![flour("450")]);
        assert!(validate_recipe(&recipe).is_ok());
    }

    #[test]
    fn test_validate_recipe_negative_price() {
        let recipe = Recipe::new("Country Loaf", dec("-1"), vec![flour("450")]);
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_validate_recipe_zero_serving_size() {
        let mut recipe = Recipe::new("Country Loaf", dec("9.50"), vec![flour("450")]);
        recipe.serving_size_grams = Some(Decimal::ZERO);
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_validate_recipe_negative_levain_hydration() {
        let mut recipe = Recipe::new("Country Loaf", dec("9.50"), vec![flour("450")]);
        recipe.levain_details = Some(crate::models::LevainDetails {
            hydration: dec("-0.5"),
        });
        assert!(validate_recipe(&recipe).is_err());
    }

    // ========================================================================
    // Order Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_order_item_zero_quantity() {
        let item = OrderItem {
            recipe_id: uuid::Uuid::new_v4(),
            name: "Country Loaf".to_string(),
            quantity: 0,
            weight_grams: dec("900"),
        };
        assert!(validate_order_item(&item).is_err());
    }

    #[test]
    fn test_validate_order_item_valid() {
        let item = OrderItem {
            recipe_id: uuid::Uuid::new_v4(),
            name: "Country Loaf".to_string(),
            quantity: 2,
            weight_grams: dec("900"),
        };
        assert!(validate_order_item(&item).is_ok());
    }

    // ========================================================================
    // General Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_promo_percent_over_100() {
        let promo = PromoCode {
            id: None,
            code: "WELCOME".to_string(),
            promo_type: PromoType::Percent,
            value: dec("150"),
            min_order_value: None,
            description: "Welcome discount".to_string(),
            is_active: true,
            usage_count: 0,
        };
        assert!(validate_promo_code(&promo).is_err());
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
