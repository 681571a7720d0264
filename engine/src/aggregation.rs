//! Order and subscription aggregation for a bake date
//!
//! Quantities are keyed by recipe display name, not id: the order items and
//! subscription rows the hosted store holds only carry the name reliably,
//! and the production sheets are read by name. Two recipes sharing a name
//! therefore merge into one bucket; a test pins this so any move to
//! id-based keying is a deliberate change.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use shared::{Order, OrderStatus, Subscription, SubscriptionStatus};

/// Summed quantity per recipe display name
pub type QuantityByRecipe = BTreeMap<String, u32>;

/// Sum item quantities across the orders to produce on `bake_date`.
///
/// An order counts when its production date (pickup date, else the UTC date
/// it was placed) matches and its status is still actionable: PENDING,
/// READY, or SHIPPED. COMPLETED and CANCELLED orders are excluded.
pub fn aggregate_orders(orders: &[Order], bake_date: NaiveDate) -> QuantityByRecipe {
    let mut quantities = QuantityByRecipe::new();
    for order in orders
        .iter()
        .filter(|o| o.status.is_actionable() && o.production_date() == bake_date)
    {
        for item in &order.items {
            *quantities.entry(item.name.clone()).or_insert(0) += item.quantity;
        }
    }
    tracing::debug!(
        %bake_date,
        recipes = quantities.len(),
        "aggregated orders for bake date"
    );
    quantities
}

/// Sum quantities for ACTIVE subscriptions whose next bake date matches.
///
/// PAUSED and CANCELLED subscriptions never contribute, and an active one
/// contributes only on its `next_bake_date`.
pub fn aggregate_subscriptions(
    subscriptions: &[Subscription],
    bake_date: NaiveDate,
) -> QuantityByRecipe {
    let mut quantities = QuantityByRecipe::new();
    for subscription in subscriptions.iter().filter(|s| {
        s.status == SubscriptionStatus::Active && s.next_bake_date == bake_date
    }) {
        *quantities
            .entry(subscription.recipe_name.clone())
            .or_insert(0) += subscription.quantity;
    }
    quantities
}

/// Merge two per-recipe quantity maps by summing matching names
pub fn merge_quantities(mut base: QuantityByRecipe, extra: &QuantityByRecipe) -> QuantityByRecipe {
    for (name, quantity) in extra {
        *base.entry(name.clone()).or_insert(0) += quantity;
    }
    base
}

/// Everything to bake on `bake_date`: discrete orders plus standing
/// subscriptions, merged into one quantity map.
pub fn production_quantities(
    orders: &[Order],
    subscriptions: &[Subscription],
    bake_date: NaiveDate,
) -> QuantityByRecipe {
    let order_quantities = aggregate_orders(orders, bake_date);
    let subscription_quantities = aggregate_subscriptions(subscriptions, bake_date);
    merge_quantities(order_quantities, &subscription_quantities)
}

/// Dashboard tile counts for one bake date
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    pub pending: usize,
    /// READY and SHIPPED orders, both "done baking" from the bench's view
    pub ready: usize,
    pub completed: usize,
    /// Every order dated for the bake date, regardless of status
    pub total: usize,
}

/// Count orders for `bake_date` by lifecycle bucket
pub fn order_status_summary(orders: &[Order], bake_date: NaiveDate) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for order in orders.iter().filter(|o| o.production_date() == bake_date) {
        summary.total += 1;
        match order.status {
            OrderStatus::Pending => summary.pending += 1,
            OrderStatus::Ready | OrderStatus::Shipped => summary.ready += 1,
            OrderStatus::Completed => summary.completed += 1,
            OrderStatus::Cancelled => {}
        }
    }
    summary
}
