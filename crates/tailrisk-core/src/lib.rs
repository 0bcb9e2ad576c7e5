//! # Tailrisk Core
//!
//! Core types for the Tailrisk historical risk library.
//!
//! This crate provides the foundational building blocks used throughout Tailrisk:
//!
//! - **Types**: Domain types like `Date`, `PriceSeries`, `ReturnSeries`
//! - **Parameters**: Validated `ConfidenceLevel`, `InvestmentAmount` and `DateWindow`
//! - **Return preparation**: Period-over-period returns from a price series
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes make out-of-range risk parameters unrepresentable
//! - **Explicit Over Implicit**: Missing prices stay `None` instead of `NaN`
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_core::prelude::*;
//!
//! let d = |s| Date::parse(s).unwrap();
//! let prices = PriceSeries::new(vec![
//!     PriceObservation::new(d("2025-01-02")).with_close(100.0),
//!     PriceObservation::new(d("2025-01-03")).with_close(102.0),
//!     PriceObservation::new(d("2025-01-06")).with_close(99.96),
//! ])
//! .unwrap();
//!
//! let returns = prices.returns();
//! assert_eq!(returns.len(), 2);
//! assert!((returns.values()[0] - 0.02).abs() < 1e-12);
//!
//! let confidence = ConfidenceLevel::from_percent(95).unwrap();
//! assert_eq!(confidence.tail_index(100), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        ConfidenceLevel, Date, DateWindow, DatedReturn, Interval, InvestmentAmount,
        PriceField, PriceObservation, PriceSeries, ReturnSeries,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{
    ConfidenceLevel, Date, DateWindow, DatedReturn, Interval, InvestmentAmount, PriceField,
    PriceObservation, PriceSeries, ReturnSeries,
};
