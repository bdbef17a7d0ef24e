//! Who bought what.

use serde::Serialize;

use storefront_orders::Order;
use storefront_products::Product;
use storefront_users::User;

use crate::grouping::FirstSeen;

/// A product and every user who ordered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductBuyers<'a> {
    pub product: &'a Product,
    /// One entry per occurrence, so a user appears once for every time the
    /// product shows up in one of their orders.
    pub buyers: Vec<&'a User>,
}

/// Mean age of the users whose orders contain `product`.
///
/// Each matching order contributes its user once, even if the product appears
/// several times in it. Returns `0.0` when no order matches.
pub fn average_age_for_product_buyers(product: &Product, orders: &[Order]) -> f64 {
    let (sum, matched) = orders
        .iter()
        .filter(|order| order.contains(product))
        .fold((0i64, 0u64), |(sum, matched), order| {
            (sum + i64::from(order.user().age()), matched + 1)
        });

    let average = if matched == 0 {
        0.0
    } else {
        sum as f64 / matched as f64
    };

    tracing::debug!(
        product = product.name(),
        orders = orders.len(),
        matched,
        average,
        "average buyer age"
    );
    average
}

/// Every distinct product mapped to the users who ordered it.
///
/// Products are listed in first-encounter order and buyers in encounter
/// order. Duplicates are kept.
pub fn product_buyers(orders: &[Order]) -> Vec<ProductBuyers<'_>> {
    let mut groups = FirstSeen::new();
    for order in orders {
        for product in order.products() {
            groups.slot(product, Vec::new).push(order.user());
        }
    }

    let mapping: Vec<ProductBuyers<'_>> = groups
        .into_entries()
        .into_iter()
        .map(|(product, buyers)| ProductBuyers { product, buyers })
        .collect();

    tracing::debug!(orders = orders.len(), products = mapping.len(), "product buyers");
    mapping
}
