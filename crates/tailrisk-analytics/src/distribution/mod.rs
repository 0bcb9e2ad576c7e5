//! Return distribution data for presentation.
//!
//! Rendering is left to the caller; this module only produces the bins and
//! the marker positions to draw over them.

mod histogram;

pub use histogram::{Histogram, HistogramBin};

use serde::{Deserialize, Serialize};

use crate::risk::TailRiskEstimate;

/// Positions of the vertical markers drawn over a return histogram.
///
/// VaR and ES are loss magnitudes, so their markers sit at the negated
/// values on the return axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMarkers {
    /// Return at the VaR boundary (`-VaR`)
    pub var: Option<f64>,
    /// Return at the ES level (`-ES`)
    pub expected_shortfall: Option<f64>,
    /// Mean return
    pub expected_return: Option<f64>,
}

impl RiskMarkers {
    /// Markers for an estimate and a mean return.
    #[must_use]
    pub fn new(estimate: &TailRiskEstimate, expected_return: Option<f64>) -> Self {
        Self {
            var: estimate.var().map(|v| -v),
            expected_shortfall: estimate.expected_shortfall().map(|es| -es),
            expected_return,
        }
    }
}
