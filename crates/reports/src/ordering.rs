//! Stable sorts over products and orders.

use std::cmp::Reverse;

use storefront_orders::Order;
use storefront_products::Product;

/// Products by ascending price. Equal prices keep their input order.
pub fn sort_products_by_price(products: &[Product]) -> Vec<&Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by_key(|product| product.price());
    tracing::debug!(products = sorted.len(), "sorted products by price");
    sorted
}

/// Orders by descending user age. Equal ages keep their input order.
pub fn sort_orders_by_user_age_desc(orders: &[Order]) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by_key(|order| Reverse(order.user().age()));
    tracing::debug!(orders = sorted.len(), "sorted orders by user age");
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_products::Price;
    use storefront_users::User;

    fn product(name: &str, cents: u64) -> Product {
        Product::tangible(name, Price::from_cents(cents), 1, 1)
    }

    fn order(name: &str, age: i32) -> Order {
        Order::new(User::new(name, age), vec![product("A", 100)])
    }

    #[test]
    fn products_sorted_ascending_with_stable_ties() {
        let products = vec![
            product("C", 10_000),
            product("A", 2050),
            product("Tie 1", 5000),
            product("D", 8125),
            product("Tie 2", 5000),
        ];
        let names: Vec<&str> = sort_products_by_price(&products)
            .into_iter()
            .map(Product::name)
            .collect();
        assert_eq!(names, ["A", "Tie 1", "Tie 2", "D", "C"]);
    }

    #[test]
    fn orders_sorted_by_age_descending_with_stable_ties() {
        let orders = vec![
            order("Bob", 19),
            order("Alice", 32),
            order("Twin 1", 27),
            order("Charlie", 20),
            order("Twin 2", 27),
        ];
        let names: Vec<&str> = sort_orders_by_user_age_desc(&orders)
            .into_iter()
            .map(|o| o.user().name())
            .collect();
        assert_eq!(names, ["Alice", "Twin 1", "Twin 2", "Charlie", "Bob"]);
    }

    #[test]
    fn empty_inputs_sort_to_empty() {
        assert!(sort_products_by_price(&[]).is_empty());
        assert!(sort_orders_by_user_age_desc(&[]).is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec((0u8..20, 0u64..10), 0..30).prop_map(|entries| {
                entries
                    .into_iter()
                    .map(|(n, cents)| product(&format!("P{n}"), cents))
                    .collect()
            })
        }

        proptest! {
            /// Property: adjacent prices are non-decreasing.
            #[test]
            fn prices_are_non_decreasing(products in arb_products()) {
                let sorted = sort_products_by_price(&products);
                prop_assert_eq!(sorted.len(), products.len());
                for pair in sorted.windows(2) {
                    prop_assert!(pair[0].price() <= pair[1].price());
                }
            }

            /// Property: sorting an already sorted list changes nothing.
            #[test]
            fn sorting_is_idempotent(products in arb_products()) {
                let once: Vec<Product> =
                    sort_products_by_price(&products).into_iter().cloned().collect();
                let twice = sort_products_by_price(&once);
                for (a, b) in once.iter().zip(twice) {
                    prop_assert!(std::ptr::eq(a, b));
                }
            }

            /// Property: equal prices keep their input order.
            #[test]
            fn equal_prices_keep_input_order(products in arb_products()) {
                let sorted = sort_products_by_price(&products);
                let position = |p: &Product| products.iter().position(|q| std::ptr::eq(p, q));
                for pair in sorted.windows(2) {
                    if pair[0].price() == pair[1].price() {
                        prop_assert!(position(pair[0]) < position(pair[1]));
                    }
                }
            }

            /// Property: user ages are non-increasing after sorting orders.
            #[test]
            fn ages_are_non_increasing(ages in prop::collection::vec(-5i32..100, 0..30)) {
                let orders: Vec<Order> = ages.iter().map(|age| order("U", *age)).collect();
                let sorted = sort_orders_by_user_age_desc(&orders);
                for pair in sorted.windows(2) {
                    prop_assert!(pair[0].user().age() >= pair[1].user().age());
                }
            }

            /// Property: orders of equally aged users keep their input order.
            #[test]
            fn equal_ages_keep_input_order(ages in prop::collection::vec(0i32..5, 0..30)) {
                let orders: Vec<Order> = ages
                    .iter()
                    .enumerate()
                    .map(|(i, age)| order(&format!("U{i}"), *age))
                    .collect();
                let sorted = sort_orders_by_user_age_desc(&orders);
                prop_assert_eq!(sorted.len(), orders.len());
                let position = |o: &Order| orders.iter().position(|q| std::ptr::eq(o, q));
                for pair in sorted.windows(2) {
                    if pair[0].user().age() == pair[1].user().age() {
                        prop_assert!(position(pair[0]) < position(pair[1]));
                    }
                }
            }
        }
    }
}
