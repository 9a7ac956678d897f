//! Entity trait shared by catalog items, customers, and rentals.

/// An entity: something with a stable identity across state changes.
///
/// Identifiers here are small `Copy` newtypes over UUIDs (see [`crate::id`]).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
