//! Entity trait: identity that survives mutation.

/// An object whose identity outlives changes to its attributes.
///
/// A person who gets a raise or marries is still the same person; two people
/// with identical names and ages are not.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> Self::Id;
}
