//! Error types for Gatekeeper
//!
//! A single error kind covers the whole crate: tier lookups against an
//! unrecognized tier name. Alias resolution never fails (unknown names are
//! passed through unchanged), so it has no error representation here.

use thiserror::Error;

/// Access configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The named tier is not present in the access tables.
    ///
    /// Callers gate access and billing decisions on tier lookups, so an
    /// unrecognized tier must surface as an error rather than an empty or
    /// default answer.
    #[error("Unknown subscription tier: {0}")]
    UnknownTier(String),
}

/// Result type alias for convenience
pub type AccessResult<T> = Result<T, AccessError>;
