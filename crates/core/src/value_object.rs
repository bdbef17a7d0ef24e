//! Value object trait: equality by value, not identity.
//!
//! Users, products and orders carry no identifiers. Two of them built from the
//! same attributes are the same thing as far as every report is concerned.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// A value object may define equality over a subset of its fields. Products,
/// for instance, compare on name and price only, so variant-specific data
/// (weight, activation code) does not split a product into two groups when
/// orders are aggregated.
///
/// The trait requires:
/// - **Clone**: values are copied freely into report results
/// - **Eq + Hash**: values are grouped and used as mapping keys
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct User {
///     name: String,
///     age: i32,
/// }
///
/// impl ValueObject for User {}
///
/// let a = User { name: "Alice".to_string(), age: 32 };
/// let b = User { name: "Alice".to_string(), age: 32 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
