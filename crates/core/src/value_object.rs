//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Ledger values (`ItemName`, `Quantity`) carry no identity: two values with
/// the same contents are interchangeable. They are immutable once built, so
/// arithmetic returns a new value instead of mutating in place.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
