//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// stock shortfalls, illegal status moves). All variants are recoverable:
/// the caller surfaces a message and state is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty supplier, non-positive quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A debit asked for more than the pool currently holds.
    #[error("insufficient stock: {0}")]
    InsufficientStock(String),

    /// A negative amount was passed to a credit or debit.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A domain invariant was violated (data-integrity fault at rest).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A requested order or shipment was not found.
    #[error("not found")]
    NotFound,

    /// An illegal status transition (e.g. moving a shipment backward).
    #[error("conflict: {0}")]
    Conflict(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn insufficient_stock(msg: impl Into<String>) -> Self {
        Self::InsufficientStock(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
