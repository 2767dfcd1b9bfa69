//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities within an aggregate (e.g. an order line item) are compared by
/// identity, not by attribute values; value comparisons are explicit business
/// operations.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
