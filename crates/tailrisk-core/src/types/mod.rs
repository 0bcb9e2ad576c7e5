//! Domain types for historical risk estimation.
//!
//! - [`Date`]: Calendar date of an observation
//! - [`Interval`]: Observation frequency of a price series
//! - [`PriceObservation`] / [`PriceSeries`]: Raw OHLC prices
//! - [`DatedReturn`] / [`ReturnSeries`]: Period-over-period fractional returns
//! - [`DateWindow`]: Inclusive date range used to select returns
//! - [`ConfidenceLevel`] / [`InvestmentAmount`]: Validated risk parameters

mod date;
mod interval;
mod params;
mod prices;
mod returns;
mod window;

pub use date::Date;
pub use interval::Interval;
pub use params::{ConfidenceLevel, InvestmentAmount};
pub use prices::{PriceField, PriceObservation, PriceSeries};
pub use returns::{DatedReturn, ReturnSeries};
pub use window::DateWindow;
