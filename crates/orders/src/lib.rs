//! Orders domain module.
//!
//! An order ties one user to the list of products they bought.

pub mod order;

pub use order::Order;
