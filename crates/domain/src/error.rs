//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The body mode is not one of the supported encodings.
    #[error("unsupported body mode: {0}")]
    UnsupportedBodyMode(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
