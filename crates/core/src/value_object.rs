//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. An expiry report computed twice from the same inputs is
//! the same report.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// The trait requires:
/// - **Clone**: values are copied, never shared mutably
/// - **PartialEq**: comparison by attribute values
/// - **Debug**: helpful for logging and assertions
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
