//! Runs every query against the report inputs.

use serde::Serialize;

use storefront_orders::Order;
use storefront_products::{CodeRegistry, Product};
use storefront_reports::{
    OrderWeight, ProductBuyers, average_age_for_product_buyers, most_expensive_product,
    most_popular_product, product_buyers, sort_orders_by_user_age_desc, sort_products_by_price,
    total_weight_per_order,
};

use crate::sample::ReportInputs;

/// Registry state for one code, before and after marking it used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeCheck<'a> {
    pub code: &'a str,
    pub used_before: bool,
    pub used_after: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AverageAge<'a> {
    pub product: &'a Product,
    pub average: f64,
}

/// Every report result, in print order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontReport<'a> {
    pub code_check: CodeCheck<'a>,
    pub most_expensive: Option<&'a Product>,
    pub most_popular: Option<&'a Product>,
    pub average_age: AverageAge<'a>,
    pub product_buyers: Vec<ProductBuyers<'a>>,
    pub products_by_price: Vec<&'a Product>,
    pub orders_by_user_age_desc: Vec<&'a Order>,
    pub order_weights: Vec<OrderWeight<'a>>,
}

/// Run the registry check and every query.
///
/// The only side effect is marking `inputs.tracked_code` used in `registry`.
pub fn run<'a>(inputs: &'a ReportInputs, registry: &CodeRegistry) -> StorefrontReport<'a> {
    let code = inputs.tracked_code.as_str();
    let used_before = registry.is_code_used(code);
    registry.use_code(code);
    let used_after = registry.is_code_used(code);

    let orders = inputs.orders.as_slice();

    StorefrontReport {
        code_check: CodeCheck {
            code,
            used_before,
            used_after,
        },
        most_expensive: most_expensive_product(orders),
        most_popular: most_popular_product(orders),
        average_age: AverageAge {
            product: &inputs.tracked_product,
            average: average_age_for_product_buyers(&inputs.tracked_product, orders),
        },
        product_buyers: product_buyers(orders),
        products_by_price: sort_products_by_price(&inputs.catalog),
        orders_by_user_age_desc: sort_orders_by_user_age_desc(orders),
        order_weights: total_weight_per_order(orders),
    }
}
