//! # Tailrisk Traits
//!
//! Trait definitions for the collaborators that feed the risk estimator.
//!
//! This crate contains ONLY trait definitions and their request/error types.
//! Implementations live in extension crates:
//!
//! - `tailrisk-ext-file`: CSV files and example dataset directories
//! - `tailrisk-ext-alphavantage`: Alpha Vantage time-series API
//!
//! ## Module Structure
//!
//! - [`market_data`]: The [`PriceSource`](market_data::PriceSource) trait and request types
//! - [`error`]: Error type shared by all sources

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod market_data;

// Re-export commonly used types
pub use error::TraitError;
pub use market_data::{PriceRequest, PriceSource, SourceType, StaticPriceSource};
