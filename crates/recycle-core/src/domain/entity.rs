//! Domain Layer - Errors
//!
//! Common result and error types shared by every core operation.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No card is bound to the given member id
    #[error("Not found: {0}")]
    NotFound(String),
    /// The key-value store rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),
    /// The card configuration could not be used
    #[error("Invalid config: {0}")]
    Config(String),
}
