//! Risk analytics over a return series.
//!
//! - **VaR / ES**: Historical simulation at a single confidence level
//! - **Ladder**: The same estimate across several confidence levels
//! - **Expected return**: Arithmetic mean of the series
//!
//! # Example
//!
//! ```rust
//! use tailrisk_analytics::risk::prelude::*;
//! use tailrisk_core::ConfidenceLevel;
//!
//! let returns: Vec<f64> = (0..100).map(|i| (i as f64 - 50.0) / 1000.0).collect();
//! let estimate = historical_var_es(&returns, ConfidenceLevel::from_percent(95).unwrap());
//! assert_eq!(estimate.var(), Some(0.045));
//! ```

pub mod ladder;
pub mod var;

use tailrisk_core::ReturnSeries;

pub use ladder::{confidence_ladder, standard_ladder_levels, LadderRung};
pub use var::{
    historical_var_es, historical_var_es_checked, InsufficientData, TailRisk, TailRiskEstimate,
};

/// Expected return of a series: its arithmetic mean, `None` when empty.
///
/// Computed independently of the tail estimate so it is available even when
/// VaR and ES are not.
#[must_use]
pub fn expected_return(returns: &ReturnSeries) -> Option<f64> {
    returns.mean()
}

/// Prelude for convenient imports
pub mod prelude {
    pub use super::expected_return;
    pub use super::ladder::*;
    pub use super::var::*;
}
