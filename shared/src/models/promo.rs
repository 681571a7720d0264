//! Promo code models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::PromoType;

/// A discount code applied at checkout
///
/// Redemption happens in the checkout flow; the production engine only ever
/// sees the resulting `discount_applied` on an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub code: String,
    #[serde(rename = "type")]
    pub promo_type: PromoType,
    pub value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<Decimal>,
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub usage_count: u32,
}
