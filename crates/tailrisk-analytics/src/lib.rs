//! # Tailrisk Analytics
//!
//! Historical-simulation risk estimation over a series of periodic returns.
//!
//! - **Risk**: Value-at-Risk and Expected Shortfall from empirical order
//!   statistics, a confidence ladder across several levels
//! - **Distribution**: Histogram data with VaR / ES / expected-return markers
//! - **Report**: Everything a presentation layer needs for one parameter set,
//!   including the scaling to an investment amount
//!
//! ## Usage
//!
//! ```rust
//! use tailrisk_analytics::prelude::*;
//! use tailrisk_core::ConfidenceLevel;
//!
//! let returns = [-0.05, -0.03, -0.01, 0.00, 0.02, 0.04, 0.06];
//! let confidence = ConfidenceLevel::new(0.80).unwrap();
//!
//! match historical_var_es(&returns, confidence) {
//!     TailRiskEstimate::Estimated(risk) => {
//!         assert!((risk.var - 0.03).abs() < 1e-12);
//!         assert!((risk.expected_shortfall - 0.05).abs() < 1e-12);
//!     }
//!     TailRiskEstimate::Insufficient(reason) => panic!("{reason}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod distribution;
pub mod error;
pub mod report;
pub mod risk;

// Re-export the error type
pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tailrisk_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Risk
    pub use crate::risk::{
        confidence_ladder, expected_return, historical_var_es, historical_var_es_checked,
        standard_ladder_levels, InsufficientData, LadderRung, TailRisk, TailRiskEstimate,
    };

    // Distribution
    pub use crate::distribution::{Histogram, HistogramBin, RiskMarkers};

    // Report
    pub use crate::report::{ReportStatus, RiskReport, RiskReportBuilder};
}
