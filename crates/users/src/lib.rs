//! Users domain module.
//!
//! A user is whoever places an order. Users have no identifier; two users with
//! the same name and age are the same user.

pub mod user;

pub use user::User;
