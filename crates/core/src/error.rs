//! Domain error model.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every store operation either succeeds completely or fails with one of
/// these, leaving the store untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The referenced identifier does not exist (never created, or deleted).
    #[error("not found")]
    NotFound,

    /// A request payload failed required-field or type checks.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
}

impl From<ValidationErrors> for DomainError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}
