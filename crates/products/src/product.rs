use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

use crate::price::Price;

/// Physical product data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tangible {
    pub size: i32,
    /// Contributes to order weight totals. Any value is accepted, including
    /// negative ones.
    pub weight: i32,
}

/// Non-physical product data.
///
/// The expiration date is descriptive only; nothing rejects an expired code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digital {
    pub code: String,
    pub expires_on: NaiveDate,
}

/// Product variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProductKind {
    Tangible(Tangible),
    Digital(Digital),
}

/// A sellable product.
///
/// Equality and hashing use `name` and `price` only. The variant is ignored,
/// so a tangible and a digital product sharing name and price are the same
/// product to every aggregation, and so are two digital products that differ
/// only in activation code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Price,
    #[serde(flatten)]
    kind: ProductKind,
}

impl Product {
    pub fn tangible(name: impl Into<String>, price: Price, size: i32, weight: i32) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ProductKind::Tangible(Tangible { size, weight }),
        }
    }

    pub fn digital(
        name: impl Into<String>,
        price: Price,
        code: impl Into<String>,
        expires_on: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ProductKind::Digital(Digital {
                code: code.into(),
                expires_on,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn as_tangible(&self) -> Option<&Tangible> {
        match &self.kind {
            ProductKind::Tangible(t) => Some(t),
            ProductKind::Digital(_) => None,
        }
    }

    pub fn as_digital(&self) -> Option<&Digital> {
        match &self.kind {
            ProductKind::Digital(d) => Some(d),
            ProductKind::Tangible(_) => None,
        }
    }

    pub fn is_tangible(&self) -> bool {
        self.as_tangible().is_some()
    }

    pub fn is_digital(&self) -> bool {
        self.as_digital().is_some()
    }

    /// Shipping weight. Digital products weigh nothing.
    pub fn weight(&self) -> i32 {
        match &self.kind {
            ProductKind::Tangible(t) => t.weight,
            ProductKind::Digital(_) => 0,
        }
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price && self.name == other.name
    }
}

impl Eq for Product {}

impl core::hash::Hash for Product {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.price.hash(state);
    }
}

impl ValueObject for Product {}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Product{{name='{}', price={}}}", self.name, self.price)
    }
}
