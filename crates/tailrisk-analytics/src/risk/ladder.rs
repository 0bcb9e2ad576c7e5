//! Tail risk across several confidence levels.
//!
//! The sample is sorted once and every rung reads the same order
//! statistics. With the `parallel` feature the rungs are evaluated with
//! rayon.

use serde::{Deserialize, Serialize};

use super::var::{estimate_sorted, TailRiskEstimate};
use tailrisk_core::ConfidenceLevel;

/// One confidence level of a ladder and its estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderRung {
    /// Confidence level of this rung
    pub confidence: ConfidenceLevel,
    /// Estimate at that level
    pub estimate: TailRiskEstimate,
}

/// Whole-percent levels from 90% to 99%, ascending.
#[must_use]
pub fn standard_ladder_levels() -> Vec<ConfidenceLevel> {
    (ConfidenceLevel::MIN_PERCENT..=ConfidenceLevel::MAX_PERCENT)
        .filter_map(|p| ConfidenceLevel::from_percent(p).ok())
        .collect()
}

/// Estimates VaR and ES at each level, in the order given.
///
/// Each rung equals `historical_var_es(returns, level)` for its level.
#[must_use]
pub fn confidence_ladder(returns: &[f64], levels: &[ConfidenceLevel]) -> Vec<LadderRung> {
    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rung = |confidence: &ConfidenceLevel| LadderRung {
        confidence: *confidence,
        estimate: estimate_sorted(&sorted, *confidence),
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        levels.par_iter().map(rung).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        levels.iter().map(rung).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::var::{historical_var_es, InsufficientData};

    #[test]
    fn test_standard_levels() {
        let levels = standard_ladder_levels();
        assert_eq!(levels.len(), 10);
        assert_eq!(levels[0].value(), 0.90);
        assert_eq!(levels[9].value(), 0.99);
    }

    #[test]
    fn test_ladder_matches_single_estimates() {
        let returns: Vec<f64> = (0..250)
            .map(|i| ((i * 37) % 101) as f64 / 1000.0 - 0.05)
            .collect();
        let levels = standard_ladder_levels();

        let ladder = confidence_ladder(&returns, &levels);
        assert_eq!(ladder.len(), levels.len());
        for (rung, level) in ladder.iter().zip(&levels) {
            assert_eq!(rung.confidence, *level);
            assert_eq!(rung.estimate, historical_var_es(&returns, *level));
        }
    }

    #[test]
    fn test_ladder_keeps_level_order() {
        let returns: Vec<f64> = (0..100).map(|i| f64::from(i) / 100.0).collect();
        let levels = [
            ConfidenceLevel::from_percent(99).unwrap(),
            ConfidenceLevel::from_percent(90).unwrap(),
        ];
        let ladder = confidence_ladder(&returns, &levels);
        assert_eq!(ladder[0].confidence.value(), 0.99);
        assert_eq!(ladder[1].confidence.value(), 0.90);
    }

    #[test]
    fn test_ladder_on_short_sample() {
        let returns: Vec<f64> = (0..11).map(|i| f64::from(i) / 100.0).collect();
        let ladder = confidence_ladder(&returns, &standard_ladder_levels());

        // (1 - 0.90) * 11 floors to 1; every stricter level floors to 0
        assert!(ladder[0].estimate.is_estimated());
        for rung in &ladder[1..] {
            assert!(matches!(
                rung.estimate,
                TailRiskEstimate::Insufficient(InsufficientData::TailTooThin { .. })
            ));
        }
    }

    #[test]
    fn test_ladder_on_empty_sample() {
        let ladder = confidence_ladder(&[], &standard_ladder_levels());
        assert!(ladder
            .iter()
            .all(|r| r.estimate == TailRiskEstimate::Insufficient(InsufficientData::EmptySeries)));
    }
}
