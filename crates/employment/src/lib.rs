//! Employment domain module: jobs and how they pay.
//!
//! Deterministic business rules only: income calculation and raises.

pub mod job;

pub use job::{Compensation, DEFAULT_ANNUAL_HOURS, Job};
