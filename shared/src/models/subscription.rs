//! Standing subscription models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{SubscriptionFrequency, SubscriptionStatus};

/// A recurring order for one recipe
///
/// The aggregator treats an ACTIVE subscription as a virtual order for its
/// `next_bake_date` only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub recipe_id: Uuid,
    /// Display name of the recipe at signup time
    pub recipe_name: String,
    pub quantity: u32,
    pub frequency: SubscriptionFrequency,
    pub price: Decimal,
    pub start_date: NaiveDate,
    pub next_bake_date: NaiveDate,
    pub status: SubscriptionStatus,
}
