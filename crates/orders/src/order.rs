use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;
use storefront_products::Product;
use storefront_users::User;

/// A user's purchase.
///
/// Products keep their order; duplicates are allowed and the same product may
/// appear in any number of orders. Equality and hashing cover the user and the
/// product list, using product equality (name and price).
///
/// An empty product list is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    user: User,
    products: Vec<Product>,
}

impl Order {
    pub fn new(user: User, products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            user,
            products: products.into_iter().collect(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.products.contains(product)
    }

    /// Sum of tangible product weights; digital products count as zero.
    ///
    /// Weights are summed as `i64`, so no list of `i32` weights short of
    /// 2^32 entries can overflow.
    pub fn total_weight(&self) -> i64 {
        self.products.iter().map(|p| i64::from(p.weight())).sum()
    }
}

impl ValueObject for Order {}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Order{{user={}, products=[", self.user)?;
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{product}")?;
        }
        f.write_str("]}")
    }
}
