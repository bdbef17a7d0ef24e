//! Products domain module.
//!
//! Products come in two variants (tangible and digital) sharing a name and a
//! price. Digital products carry activation codes; redeemed codes are tracked
//! by a [`CodeRegistry`] owned by the caller.

pub mod codes;
pub mod price;
pub mod product;

pub use codes::CodeRegistry;
pub use price::Price;
pub use product::{Digital, Product, ProductKind, Tangible};
