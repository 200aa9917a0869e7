//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every record held by a registry or journal is an entity: two values with the
/// same id are the same record, whatever their other fields say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
