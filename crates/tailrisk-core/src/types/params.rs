//! Validated risk parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Confidence level of a risk estimate, strictly inside (0, 1).
///
/// 0.95 means VaR and ES describe the worst 5% of outcomes. Because the
/// value can never reach 0 or 1, the tail index it produces for a sample of
/// `n` returns is always below `n`.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::types::ConfidenceLevel;
///
/// let c = ConfidenceLevel::from_percent(95).unwrap();
/// assert_eq!(c.value(), 0.95);
/// assert_eq!(c.tail_index(10), 0);
/// assert!(ConfidenceLevel::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Lowest whole percentage accepted by [`ConfidenceLevel::from_percent`].
    pub const MIN_PERCENT: u8 = 90;

    /// Highest whole percentage accepted by [`ConfidenceLevel::from_percent`].
    pub const MAX_PERCENT: u8 = 99;

    /// Creates a confidence level from a fraction in (0, 1).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfidence` for non-finite values or values
    /// outside the open interval.
    pub fn new(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::invalid_confidence(value, "must be finite"));
        }
        if value <= 0.0 || value >= 1.0 {
            return Err(CoreError::invalid_confidence(
                value,
                "must be strictly between 0 and 1",
            ));
        }
        // 1 - c must stay below 1 in f64 for the tail index to stay in range
        if 1.0 - value >= 1.0 {
            return Err(CoreError::invalid_confidence(
                value,
                "too close to 0 to leave a tail probability below 1",
            ));
        }
        Ok(Self(value))
    }

    /// Creates a confidence level from a whole percentage in `[90, 99]`.
    ///
    /// The fraction is `percent / 100`, computed in `f64`.
    pub fn from_percent(percent: u8) -> CoreResult<Self> {
        if !(Self::MIN_PERCENT..=Self::MAX_PERCENT).contains(&percent) {
            return Err(CoreError::invalid_confidence(
                f64::from(percent),
                format!(
                    "percentage must be between {} and {}",
                    Self::MIN_PERCENT,
                    Self::MAX_PERCENT
                ),
            ));
        }
        Self::new(f64::from(percent) / 100.0)
    }

    /// Returns the confidence level as a fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Position of the tail boundary in an ascending sample of `n` returns.
    ///
    /// `floor((1 - c) * n)`, evaluated in `f64`. Always `< n`.
    #[must_use]
    pub fn tail_index(self, n: usize) -> usize {
        ((1.0 - self.0) * n as f64).floor() as usize
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self(0.95)
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * 1000.0).round() / 10.0)
    }
}

/// Notional investment amount that risk figures are scaled to.
///
/// Finite and strictly positive. Scaling is multiplicative and applies only
/// to reported figures, never to the estimation itself.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct InvestmentAmount(f64);

impl InvestmentAmount {
    /// Creates an investment amount.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAmount` for non-finite or non-positive values.
    pub fn new(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::invalid_amount(value, "must be finite"));
        }
        if value <= 0.0 {
            return Err(CoreError::invalid_amount(value, "must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the amount.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Scales a per-unit figure to this amount.
    #[must_use]
    pub fn scale(self, per_unit: f64) -> f64 {
        per_unit * self.0
    }
}

impl Default for InvestmentAmount {
    fn default() -> Self {
        Self(500.0)
    }
}

impl TryFrom<f64> for InvestmentAmount {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InvestmentAmount> for f64 {
    fn from(amount: InvestmentAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for InvestmentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_confidence_bounds() {
        assert!(ConfidenceLevel::new(0.0).is_err());
        assert!(ConfidenceLevel::new(1.0).is_err());
        assert!(ConfidenceLevel::new(-0.5).is_err());
        assert!(ConfidenceLevel::new(f64::NAN).is_err());
        assert!(ConfidenceLevel::new(1e-20).is_err());
        assert!(ConfidenceLevel::new(0.000_1).is_ok());
        assert!(ConfidenceLevel::new(0.999_9).is_ok());
    }

    #[test]
    fn test_from_percent_range() {
        assert!(ConfidenceLevel::from_percent(89).is_err());
        assert!(ConfidenceLevel::from_percent(100).is_err());
        for p in 90..=99u8 {
            let c = ConfidenceLevel::from_percent(p).unwrap();
            assert_eq!(c.value(), f64::from(p) / 100.0);
        }
    }

    #[test]
    fn test_tail_index_examples() {
        let c95 = ConfidenceLevel::from_percent(95).unwrap();
        assert_eq!(c95.tail_index(100), 5);
        assert_eq!(c95.tail_index(10), 0);
        assert_eq!(c95.tail_index(0), 0);

        let c80 = ConfidenceLevel::new(0.80).unwrap();
        assert_eq!(c80.tail_index(7), 1);

        // (1 - 0.9) * 10 is 0.9999999999999998 in binary floating point
        let c90 = ConfidenceLevel::from_percent(90).unwrap();
        assert_eq!(c90.tail_index(10), 0);
        assert_eq!(c90.tail_index(20), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfidenceLevel::from_percent(95).unwrap().to_string(), "95%");
        assert_eq!(ConfidenceLevel::new(0.975).unwrap().to_string(), "97.5%");
        assert_eq!(InvestmentAmount::new(1500.0).unwrap().to_string(), "1500.00");
    }

    #[test]
    fn test_amount_validation() {
        assert!(InvestmentAmount::new(0.0).is_err());
        assert!(InvestmentAmount::new(-100.0).is_err());
        assert!(InvestmentAmount::new(f64::INFINITY).is_err());
        let amount = InvestmentAmount::new(500.0).unwrap();
        assert_eq!(amount.scale(0.03), 15.0);
    }

    #[test]
    fn test_serde_validates() {
        let c: ConfidenceLevel = serde_json::from_str("0.99").unwrap();
        assert_eq!(c.value(), 0.99);
        assert!(serde_json::from_str::<ConfidenceLevel>("1.5").is_err());
        assert!(serde_json::from_str::<InvestmentAmount>("-1").is_err());
    }

    proptest! {
        #[test]
        fn prop_tail_index_below_sample_size(c in 0.000_1f64..0.999_9, n in 1usize..5_000) {
            let level = ConfidenceLevel::new(c).unwrap();
            prop_assert!(level.tail_index(n) < n);
        }
    }
}
