//! Value at Risk (VaR) and Expected Shortfall (ES).
//!
//! Both are reported as non-negative loss magnitudes in the unit of the
//! input returns. A sample too small for the requested confidence level
//! produces [`TailRiskEstimate::Insufficient`] rather than an error, so a
//! computed VaR of exactly zero is never confused with "cannot compute".

mod historical;

pub use historical::{historical_var_es, historical_var_es_checked};
pub(crate) use historical::estimate_sorted;

use serde::{Deserialize, Serialize};
use std::fmt;

use tailrisk_core::{ConfidenceLevel, InvestmentAmount};

/// A computed VaR / ES pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TailRisk {
    /// Loss at the tail boundary (negated order statistic)
    pub var: f64,
    /// Mean loss of the observations strictly beyond the boundary
    pub expected_shortfall: f64,
    /// Confidence level of the estimate
    pub confidence_level: ConfidenceLevel,
    /// Sample size
    pub observations: usize,
    /// Position of the boundary in the ascending sample; also the number of
    /// observations averaged for ES
    pub tail_index: usize,
}

impl TailRisk {
    /// VaR and ES scaled to an investment amount.
    #[must_use]
    pub fn scaled(&self, amount: InvestmentAmount) -> TailRisk {
        TailRisk {
            var: amount.scale(self.var),
            expected_shortfall: amount.scale(self.expected_shortfall),
            ..*self
        }
    }
}

impl fmt::Display for TailRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VaR({}): {:.4}, ES({}): {:.4} [n={}, tail={}]",
            self.confidence_level,
            self.var,
            self.confidence_level,
            self.expected_shortfall,
            self.observations,
            self.tail_index
        )
    }
}

/// Why an estimate could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InsufficientData {
    /// No returns at all
    EmptySeries,
    /// The tail index is zero: no observation falls strictly inside the tail
    TailTooThin {
        /// Sample size
        observations: usize,
        /// Computed tail index
        tail_index: usize,
    },
}

impl fmt::Display for InsufficientData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsufficientData::EmptySeries => write!(f, "no returns"),
            InsufficientData::TailTooThin {
                observations,
                tail_index,
            } => write!(
                f,
                "{observations} returns leave {tail_index} observations in the tail"
            ),
        }
    }
}

/// Outcome of a tail risk estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum TailRiskEstimate {
    /// VaR and ES were computed
    Estimated(TailRisk),
    /// The sample cannot support an estimate at this confidence level
    Insufficient(InsufficientData),
}

impl TailRiskEstimate {
    /// Returns true if VaR and ES were computed.
    #[must_use]
    pub fn is_estimated(&self) -> bool {
        matches!(self, TailRiskEstimate::Estimated(_))
    }

    /// The computed pair, if any.
    #[must_use]
    pub fn estimated(&self) -> Option<&TailRisk> {
        match self {
            TailRiskEstimate::Estimated(risk) => Some(risk),
            TailRiskEstimate::Insufficient(_) => None,
        }
    }

    /// The computed VaR, if any.
    #[must_use]
    pub fn var(&self) -> Option<f64> {
        self.estimated().map(|r| r.var)
    }

    /// The computed ES, if any.
    #[must_use]
    pub fn expected_shortfall(&self) -> Option<f64> {
        self.estimated().map(|r| r.expected_shortfall)
    }

    /// Scales a computed estimate; insufficient outcomes pass through.
    #[must_use]
    pub fn scaled(&self, amount: InvestmentAmount) -> TailRiskEstimate {
        match self {
            TailRiskEstimate::Estimated(risk) => TailRiskEstimate::Estimated(risk.scaled(amount)),
            TailRiskEstimate::Insufficient(reason) => TailRiskEstimate::Insufficient(*reason),
        }
    }
}

impl From<TailRiskEstimate> for Option<TailRisk> {
    fn from(estimate: TailRiskEstimate) -> Self {
        match estimate {
            TailRiskEstimate::Estimated(risk) => Some(risk),
            TailRiskEstimate::Insufficient(_) => None,
        }
    }
}
