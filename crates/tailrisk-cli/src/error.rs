//! CLI error types.

use thiserror::Error;

use tailrisk_traits::TraitError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid date window.
    #[error("Invalid date range: {0}")]
    InvalidWindow(String),

    /// Invalid confidence level.
    #[error("Invalid confidence level: {0}. Must be a whole percentage between 90 and 99.")]
    InvalidConfidence(String),

    /// Invalid investment amount.
    #[error("Invalid investment amount: {0}. Must be at least {min}.", min = crate::config::MIN_AMOUNT)]
    InvalidAmount(f64),

    /// No price source selected.
    #[error("No price source given. Use --file, --dataset, or --symbol.")]
    MissingSource,

    /// Invalid argument value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Price source could not be opened or read.
    #[error("Price source error: {0}")]
    Source(#[from] TraitError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
