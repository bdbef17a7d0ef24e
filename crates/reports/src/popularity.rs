//! Price and frequency extremes across all ordered products.

use serde::Serialize;

use storefront_orders::Order;
use storefront_products::Product;

use crate::grouping::FirstSeen;

/// How many times a product was ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductCount<'a> {
    pub product: &'a Product,
    pub count: usize,
}

fn all_products(orders: &[Order]) -> impl Iterator<Item = &Product> {
    orders.iter().flat_map(|order| order.products())
}

/// The highest-priced product across every order.
///
/// Among equally priced products the first one encountered wins.
pub fn most_expensive_product(orders: &[Order]) -> Option<&Product> {
    let found = all_products(orders).reduce(|best, candidate| {
        if candidate.price() > best.price() {
            candidate
        } else {
            best
        }
    });

    tracing::debug!(
        orders = orders.len(),
        product = found.map(Product::name),
        "most expensive product"
    );
    found
}

/// Occurrence count per distinct product, in first-encounter order.
///
/// Repeats within one order and across orders all count. The counts add up to
/// the total number of product entries in `orders`.
pub fn product_occurrences(orders: &[Order]) -> Vec<ProductCount<'_>> {
    let mut groups = FirstSeen::new();
    for product in all_products(orders) {
        *groups.slot(product, || 0usize) += 1;
    }

    let counts: Vec<ProductCount<'_>> = groups
        .into_entries()
        .into_iter()
        .map(|(product, count)| ProductCount { product, count })
        .collect();

    tracing::debug!(
        orders = orders.len(),
        distinct = counts.len(),
        "product occurrences"
    );
    counts
}

/// The most frequently ordered product.
///
/// Ties go to the product encountered first.
pub fn most_popular_product(orders: &[Order]) -> Option<&Product> {
    let found = product_occurrences(orders)
        .into_iter()
        .reduce(|best, candidate| if candidate.count > best.count { candidate } else { best });

    tracing::debug!(
        orders = orders.len(),
        product = found.map(|c| c.product.name()),
        count = found.map(|c| c.count),
        "most popular product"
    );
    found.map(|c| c.product)
}
