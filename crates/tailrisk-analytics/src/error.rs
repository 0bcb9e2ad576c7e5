//! Error types for the analytics engine.
//!
//! Insufficient data is deliberately absent: an estimate that cannot be
//! computed is reported through
//! [`TailRiskEstimate::Insufficient`](crate::risk::TailRiskEstimate::Insufficient).

use thiserror::Error;

use tailrisk_core::CoreError;

/// Error type for analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid risk parameter (confidence level, amount, window)
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] CoreError),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
