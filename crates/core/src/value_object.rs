//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared by their attributes.
///
/// "Modifying" a value object means building a new one:
///
/// ```ignore
/// let wallet = Money::new(100, "usd");
/// let more = wallet.add(&Money::new(5, "USD"));
/// assert_eq!(wallet.amount(), 100); // unchanged
/// assert_eq!(more.amount(), 105);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
