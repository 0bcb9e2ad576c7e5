//! Error types for price source operations.

use thiserror::Error;

use tailrisk_core::CoreError;

/// Common error type for price sources.
#[derive(Debug, Error)]
pub enum TraitError {
    /// Connection to external service failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Requested resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Operation timed out
    #[error("timeout")]
    Timeout,

    /// Parse/deserialization error
    #[error("parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The provider rejected the request (bad symbol, bad key, ...)
    #[error("request rejected: {0}")]
    RequestRejected(String),

    /// Rate limited
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Data violates a domain invariant
    #[error("invalid data: {0}")]
    InvalidData(#[from] CoreError),
}

impl From<std::io::Error> for TraitError {
    fn from(e: std::io::Error) -> Self {
        TraitError::IoError(e.to_string())
    }
}
