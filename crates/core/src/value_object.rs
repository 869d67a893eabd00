//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. `Price` and cart lines are value objects; products are
/// entities (two products with the same id are the same product).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
