//! `storefront-reports`
//!
//! **Responsibility:** report-style queries over a collection of orders.
//!
//! Every function here is pure:
//! - inputs are borrowed and never mutated,
//! - results borrow from the inputs,
//! - empty inputs produce neutral results (`None`, `0.0`, empty vectors).
//!
//! Groupings are keyed by value equality (products by name and price, orders
//! by user and products) and list their groups in first-encounter order.

mod grouping;

pub mod buyers;
pub mod ordering;
pub mod popularity;
pub mod weight;

pub use buyers::{ProductBuyers, average_age_for_product_buyers, product_buyers};
pub use ordering::{sort_orders_by_user_age_desc, sort_products_by_price};
pub use popularity::{
    ProductCount, most_expensive_product, most_popular_product, product_occurrences,
};
pub use weight::{OrderWeight, total_weight_per_order};
