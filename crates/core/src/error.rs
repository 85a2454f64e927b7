//! Domain error model.

use thiserror::Error;

/// Result type used at the parsing/configuration edges of the domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Business operations (conversion, raises, gated setters) never fail; they
/// fall back to defined values instead. This type only covers input that has
/// to be parsed before it can become a domain value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a malformed rate table).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
