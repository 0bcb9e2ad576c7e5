//! Price source traits.
//!
//! A [`PriceSource`] turns a [`PriceRequest`] into a [`PriceSeries`]. The
//! risk estimator never talks to sources directly; callers fetch a series,
//! derive returns, and hand those to the analytics crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TraitError;
use tailrisk_core::{Interval, PriceSeries};

/// Source type for price data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Snapshot/request-response (REST APIs)
    Snapshot,
    /// File-based (CSV)
    File,
    /// Manual entry / in-memory
    Manual,
}

/// What to fetch: a symbol at an observation interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRequest {
    /// Asset symbol or dataset name (e.g. `AAPL`)
    pub symbol: String,
    /// Observation interval
    pub interval: Interval,
}

impl PriceRequest {
    /// Create a new request.
    pub fn new(symbol: impl Into<String>, interval: Interval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
        }
    }
}

impl fmt::Display for PriceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.interval)
    }
}

/// Trait for price series providers.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Fetch the full price history for a request, sorted ascending by date.
    async fn fetch(&self, request: &PriceRequest) -> Result<PriceSeries, TraitError>;
}

/// A source that always serves the same series, whatever is requested.
///
/// Used for data that is already in memory (a parsed upload, test fixtures).
#[derive(Debug, Clone, Default)]
pub struct StaticPriceSource {
    series: PriceSeries,
}

impl StaticPriceSource {
    /// Create a source serving `series`.
    pub fn new(series: PriceSeries) -> Self {
        Self { series }
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    fn source_type(&self) -> SourceType {
        SourceType::Manual
    }

    async fn fetch(&self, _request: &PriceRequest) -> Result<PriceSeries, TraitError> {
        Ok(self.series.clone())
    }
}
