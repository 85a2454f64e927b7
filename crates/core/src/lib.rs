//! `famfin-core` — shared domain building blocks.
//!
//! Pure domain primitives used by every famfin crate (no IO, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{FamilyId, PersonId};
pub use value_object::ValueObject;
