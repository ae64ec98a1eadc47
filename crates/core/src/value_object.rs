//! Value object trait: equality by value, not identity.
//!
//! Everything the catalog query pipeline passes around (SKUs, categories,
//! prices, filters, discount rules) is a value object: built once, never
//! mutated, compared by its attributes.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// build a new one. Because nothing is mutated after construction, values can
/// be shared freely between concurrent queries.
///
/// ## Design Constraints
///
/// - **Clone**: values are copied into every query result
/// - **PartialEq**: two values with the same attributes are the same value
/// - **Debug**: values show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(71000), Price(71000));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
