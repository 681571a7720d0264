//! Common enums used across the platform
//!
//! Serde representations match the uppercase strings the hosted store
//! persists, so records round-trip unchanged.

use serde::{Deserialize, Serialize};

/// Role an ingredient plays in a formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientType {
    Flour,
    Water,
    Salt,
    Levain,
    Inclusion,
}

impl std::fmt::Display for IngredientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngredientType::Flour => write!(f, "Flour"),
            IngredientType::Water => write!(f, "Water"),
            IngredientType::Salt => write!(f, "Salt"),
            IngredientType::Levain => write!(f, "Levain"),
            IngredientType::Inclusion => write!(f, "Inclusion"),
        }
    }
}

/// Product category shown on the storefront
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipeCategory {
    #[default]
    Bread,
    Pastry,
    Cookie,
    Bagel,
    Muffin,
    Special,
    Other,
}

/// Flavor direction for storefront filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlavorProfile {
    Sweet,
    Savory,
    Plain,
}

/// Fulfillment channel for an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Pickup,
    Shipping,
}

/// Order lifecycle status
///
/// PENDING -> READY/SHIPPED -> COMPLETED, with CANCELLED possible at any
/// point before completion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Ready,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order still counts toward a production run.
    /// COMPLETED orders are already fulfilled and CANCELLED orders are
    /// never baked.
    pub fn is_actionable(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Ready | OrderStatus::Shipped
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Ready => write!(f, "Ready"),
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::Completed => write!(f, "Completed"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Subscription lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Cancelled,
}

/// Delivery cadence for a standing subscription
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionFrequency {
    #[default]
    Weekly,
}

/// Promo code redemption type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoType {
    Fixed,
    Percent,
    FreeLoaf,
}
