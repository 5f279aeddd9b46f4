//! Domain errors for the emergence engine.

use thiserror::Error;

/// Domain-level errors raised by the scoring engine and integrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Engine inputs violate a construction precondition
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Integration parameters are out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
