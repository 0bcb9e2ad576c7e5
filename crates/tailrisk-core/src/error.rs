//! Error types for the Tailrisk core types.
//!
//! Insufficient data for a risk estimate is not an error and does not
//! appear here; it is an outcome of the estimator itself.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date parsing or an invalid calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level: {value} - {reason}")]
    InvalidConfidence {
        /// The rejected value.
        value: f64,
        /// Reason for rejection.
        reason: String,
    },

    /// Investment amount that is not a finite positive number.
    #[error("Invalid investment amount: {value} - {reason}")]
    InvalidAmount {
        /// The rejected value.
        value: f64,
        /// Reason for rejection.
        reason: String,
    },

    /// Date window whose start is after its end.
    #[error("Invalid date window: start {start} is after end {end}")]
    InvalidWindow {
        /// Window start date.
        start: String,
        /// Window end date.
        end: String,
    },

    /// Two price observations share the same date.
    #[error("Duplicate price observation for {date}")]
    DuplicateObservation {
        /// The repeated date.
        date: String,
    },

    /// Unrecognized observation interval.
    #[error("Invalid interval: {value} (expected daily, weekly or monthly)")]
    InvalidInterval {
        /// The rejected value.
        value: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid confidence level error.
    #[must_use]
    pub fn invalid_confidence(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidConfidence {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid investment amount error.
    #[must_use]
    pub fn invalid_amount(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value,
            reason: reason.into(),
        }
    }
}
