//! The fixed sample data set the demo reports on.

use chrono::NaiveDate;

use storefront_orders::Order;
use storefront_products::{Price, Product};
use storefront_users::User;

/// Everything a report run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportInputs {
    /// Products to sort by price.
    pub catalog: Vec<Product>,
    pub orders: Vec<Order>,
    /// Product whose buyers' average age is reported.
    pub tracked_product: Product,
    /// Activation code run through the registry check.
    pub tracked_code: String,
}

/// Four users, two tangible and two digital products, four orders.
pub fn sample_inputs() -> ReportInputs {
    let alice = User::new("Alice", 32);
    let bob = User::new("Bob", 19);
    let charlie = User::new("Charlie", 20);
    let john = User::new("John", 27);

    let real_a = Product::tangible("Product A", Price::from_cents(2050), 10, 25);
    let real_b = Product::tangible("Product B", Price::from_cents(5000), 6, 17);
    let virtual_c =
        Product::digital("Product C", Price::from_cents(10_000), "xxx", date(2023, 5, 12));
    let virtual_d =
        Product::digital("Product D", Price::from_cents(8125), "yyy", date(2024, 6, 20));

    let orders = vec![
        Order::new(alice, [real_a.clone(), virtual_c.clone(), virtual_d.clone()]),
        Order::new(bob, [real_a.clone(), real_b.clone()]),
        Order::new(charlie, [real_a.clone(), virtual_d.clone()]),
        Order::new(
            john,
            [virtual_c.clone(), virtual_d.clone(), real_a.clone(), real_b.clone()],
        ),
    ];

    ReportInputs {
        catalog: vec![real_a, real_b.clone(), virtual_c, virtual_d],
        orders,
        tracked_product: real_b,
        tracked_code: "xxx".to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
