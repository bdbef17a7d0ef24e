//! Shipping weight per order.

use serde::Serialize;

use storefront_orders::Order;

use crate::grouping::FirstSeen;

/// Total tangible weight of one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderWeight<'a> {
    pub order: &'a Order,
    pub total_weight: i64,
}

/// Total weight of each order, keyed by order value.
///
/// Digital products contribute nothing. Orders equal by value (same user, same
/// products) collapse into a single entry at the position of the first one,
/// holding the total of the last one. Product equality ignores weight, so
/// those totals can differ.
pub fn total_weight_per_order(orders: &[Order]) -> Vec<OrderWeight<'_>> {
    let mut groups = FirstSeen::new();
    for order in orders {
        *groups.slot(order, || 0i64) = order.total_weight();
    }

    let weights: Vec<OrderWeight<'_>> = groups
        .into_entries()
        .into_iter()
        .map(|(order, total_weight)| OrderWeight { order, total_weight })
        .collect();

    tracing::debug!(
        orders = orders.len(),
        distinct = weights.len(),
        collapsed = orders.len() - weights.len(),
        "order weights"
    );
    weights
}
