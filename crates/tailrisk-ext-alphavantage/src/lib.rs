//! # Tailrisk Ext Alpha Vantage
//!
//! Price source backed by the Alpha Vantage `TIME_SERIES_*` endpoints.
//!
//! All client settings live in an explicit [`AlphaVantageConfig`] handed to
//! [`AlphaVantageClient::new`]; nothing is configured through process-wide
//! state.
//!
//! ```rust,no_run
//! use tailrisk_core::Interval;
//! use tailrisk_ext_alphavantage::{AlphaVantageClient, AlphaVantageConfig};
//! use tailrisk_traits::{PriceRequest, PriceSource};
//!
//! # async fn run() -> Result<(), tailrisk_traits::TraitError> {
//! let client = AlphaVantageClient::new(AlphaVantageConfig::new("demo"))?;
//! let series = client
//!     .fetch(&PriceRequest::new("IBM", Interval::Weekly))
//!     .await?;
//! println!("{} observations", series.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod config;
mod payload;

pub use client::AlphaVantageClient;
pub use config::{AlphaVantageConfig, DEFAULT_BASE_URL};
pub use payload::{function_name, parse_time_series, parse_time_series_str, series_key};
