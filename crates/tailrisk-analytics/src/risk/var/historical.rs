//! Historical-simulation VaR and ES.

use log::debug;

use super::{InsufficientData, TailRisk, TailRiskEstimate};
use crate::error::AnalyticsResult;
use tailrisk_core::ConfidenceLevel;

/// Estimate VaR and ES from a sample of returns by historical simulation.
///
/// The sample is sorted ascending (worst first) and the tail index is
/// `floor((1 - c) * n)`. VaR is the negated return at that index; ES is the
/// negated mean of the returns strictly before it. There is no interpolation
/// between order statistics. The input order does not matter.
///
/// # Arguments
///
/// * `returns` - Periodic returns as fractions (e.g. -0.01 for -1%)
/// * `confidence` - Confidence level (e.g. 0.95 excludes the worst 5%)
///
/// # Returns
///
/// [`TailRiskEstimate::Insufficient`] when the sample is empty or the tail
/// index is zero, otherwise the computed pair.
pub fn historical_var_es(returns: &[f64], confidence: ConfidenceLevel) -> TailRiskEstimate {
    if returns.is_empty() {
        debug!("no returns for VaR at {}", confidence);
        return TailRiskEstimate::Insufficient(InsufficientData::EmptySeries);
    }

    // Sort returns (ascending - worst returns first)
    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);

    estimate_sorted(&sorted, confidence)
}

/// Same as [`historical_var_es`] for a raw confidence fraction.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidParameter` if `confidence_level` is not
/// strictly between 0 and 1.
pub fn historical_var_es_checked(
    returns: &[f64],
    confidence_level: f64,
) -> AnalyticsResult<TailRiskEstimate> {
    let confidence = ConfidenceLevel::new(confidence_level)?;
    Ok(historical_var_es(returns, confidence))
}

/// Estimate from a sample already sorted ascending.
pub(crate) fn estimate_sorted(sorted: &[f64], confidence: ConfidenceLevel) -> TailRiskEstimate {
    let n = sorted.len();
    if n == 0 {
        return TailRiskEstimate::Insufficient(InsufficientData::EmptySeries);
    }

    let tail_index = confidence.tail_index(n);
    if tail_index < 1 {
        debug!(
            "{} returns at {} give tail index {}; not enough data",
            n, confidence, tail_index
        );
        return TailRiskEstimate::Insufficient(InsufficientData::TailTooThin {
            observations: n,
            tail_index,
        });
    }

    let var = -sorted[tail_index];
    let tail = &sorted[..tail_index];
    let expected_shortfall = -(tail.iter().sum::<f64>() / tail_index as f64);

    TailRiskEstimate::Estimated(TailRisk {
        var,
        expected_shortfall,
        confidence_level: confidence,
        observations: n,
        tail_index,
    })
}
