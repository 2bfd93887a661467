//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from catalog loading and HTTP errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Airport code failed validation
    #[error(transparent)]
    InvalidCode(#[from] super::InvalidAirportCode),

    /// Schedule time failed validation
    #[error(transparent)]
    InvalidTime(#[from] super::TimeError),

    /// Consecutive segments don't meet at the same airport
    #[error("segments do not connect: {0} arrives where {1} is expected")]
    BrokenChain(AirportCode, AirportCode),

    /// Path has no segments
    #[error("flight path must have at least one segment")]
    EmptyPath,
}
