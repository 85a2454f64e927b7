//! People domain module: persons with age-gated relationships, and families.
//!
//! People are shared through [`PersonRef`] handles so that one person can be a
//! family member and somebody's spouse at the same time. The spouse link is a
//! weak back-reference and never keeps the other person alive.

pub mod family;
pub mod person;

pub use family::{Family, MIN_PARENT_AGE};
pub use person::{MIN_MARRIAGE_AGE, MIN_WORKING_AGE, Person, PersonRef};
