//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// `Username` is one: two usernames with the same text are the same username,
/// whereas a user record is an [`Entity`](crate::Entity) keyed by it.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
