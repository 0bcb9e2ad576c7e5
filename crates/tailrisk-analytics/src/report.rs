//! Risk report for one return series and parameter set.
//!
//! A report gathers everything a presentation layer shows: sample size and
//! date span, expected return, VaR / ES per unit and scaled to the
//! investment amount, and histogram data with markers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::distribution::{Histogram, RiskMarkers};
use crate::risk::{expected_return, historical_var_es, TailRisk, TailRiskEstimate};
use tailrisk_core::{ConfidenceLevel, Date, InvestmentAmount, ReturnSeries};

/// Overall state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// The series has no returns
    NoData,
    /// Returns exist but cannot support an estimate
    Insufficient,
    /// VaR and ES were computed
    Complete,
}

impl ReportStatus {
    /// User-facing warning for an incomplete report.
    #[must_use]
    pub fn warning(self) -> Option<&'static str> {
        match self {
            ReportStatus::NoData => {
                Some("No return data available for the selected asset and time range.")
            }
            ReportStatus::Insufficient => {
                Some("Cannot calculate VaR and ES due to insufficient return data.")
            }
            ReportStatus::Complete => None,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportStatus::NoData => "no data",
            ReportStatus::Insufficient => "insufficient data",
            ReportStatus::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

/// Risk figures for one return series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Confidence level used
    pub confidence: ConfidenceLevel,
    /// Investment amount figures are scaled to
    pub amount: InvestmentAmount,
    /// Number of returns
    pub observations: usize,
    /// Date of the first return
    pub first_date: Option<Date>,
    /// Date of the last return
    pub last_date: Option<Date>,
    /// Mean return per unit
    pub expected_return: Option<f64>,
    /// Mean return scaled to the amount
    pub scaled_expected_return: Option<f64>,
    /// Per-unit estimate
    pub estimate: TailRiskEstimate,
    /// Estimate scaled to the amount, when computed
    pub scaled: Option<TailRisk>,
    /// Per-unit return histogram
    pub histogram: Histogram,
    /// Marker positions on the per-unit histogram
    pub markers: RiskMarkers,
    /// Histogram of returns scaled to the amount
    pub scaled_histogram: Histogram,
    /// Marker positions on the scaled histogram
    pub scaled_markers: RiskMarkers,
}

impl RiskReport {
    /// Builds a report with [`Histogram::DEFAULT_BINS`] bins.
    #[must_use]
    pub fn build(
        returns: &ReturnSeries,
        confidence: ConfidenceLevel,
        amount: InvestmentAmount,
    ) -> Self {
        RiskReportBuilder::new()
            .confidence(confidence)
            .amount(amount)
            .build(returns)
    }

    /// Overall state of the report.
    #[must_use]
    pub fn status(&self) -> ReportStatus {
        if self.observations == 0 {
            ReportStatus::NoData
        } else if self.estimate.is_estimated() {
            ReportStatus::Complete
        } else {
            ReportStatus::Insufficient
        }
    }

    /// Warning to show alongside the report, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        self.status().warning()
    }
}

/// Builder for [`RiskReport`].
///
/// # Example
///
/// ```rust
/// use tailrisk_analytics::report::RiskReportBuilder;
/// use tailrisk_core::{ConfidenceLevel, InvestmentAmount, ReturnSeries};
///
/// let report = RiskReportBuilder::new()
///     .confidence(ConfidenceLevel::from_percent(99).unwrap())
///     .amount(InvestmentAmount::new(1000.0).unwrap())
///     .bins(20)
///     .build(&ReturnSeries::default());
///
/// assert_eq!(
///     report.warning(),
///     Some("No return data available for the selected asset and time range.")
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RiskReportBuilder {
    confidence: ConfidenceLevel,
    amount: InvestmentAmount,
    bins: usize,
}

impl Default for RiskReportBuilder {
    fn default() -> Self {
        Self {
            confidence: ConfidenceLevel::default(),
            amount: InvestmentAmount::default(),
            bins: Histogram::DEFAULT_BINS,
        }
    }
}

impl RiskReportBuilder {
    /// Creates a builder with 95% confidence, an amount of 500 and 50 bins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the confidence level.
    #[must_use]
    pub fn confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the investment amount.
    #[must_use]
    pub fn amount(mut self, amount: InvestmentAmount) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the histogram bin count.
    #[must_use]
    pub fn bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Computes the report for a return series.
    #[must_use]
    pub fn build(&self, returns: &ReturnSeries) -> RiskReport {
        let values = returns.values();
        let estimate = historical_var_es(&values, self.confidence);
        let mean = expected_return(returns);

        let scaled = estimate.scaled(self.amount);
        let scaled_mean = mean.map(|m| self.amount.scale(m));
        let scaled_values: Vec<f64> = values.iter().map(|v| self.amount.scale(*v)).collect();

        log::debug!(
            "report over {} returns at {}: {:?}",
            values.len(),
            self.confidence,
            estimate
        );

        RiskReport {
            confidence: self.confidence,
            amount: self.amount,
            observations: values.len(),
            first_date: returns.first_date(),
            last_date: returns.last_date(),
            expected_return: mean,
            scaled_expected_return: scaled_mean,
            estimate,
            scaled: scaled.estimated().copied(),
            histogram: Histogram::from_values(&values, self.bins),
            markers: RiskMarkers::new(&estimate, mean),
            scaled_histogram: Histogram::from_values(&scaled_values, self.bins),
            scaled_markers: RiskMarkers::new(&scaled, scaled_mean),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tailrisk_core::DatedReturn;

    fn series(values: &[f64]) -> ReturnSeries {
        let start = Date::from_ymd(2025, 3, 3).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DatedReturn::new(start.add_days(i as i64), *v))
            .collect()
    }

    #[test]
    fn test_complete_report() {
        let returns = series(&[-0.05, -0.03, -0.01, 0.00, 0.02, 0.04, 0.06]);
        let report = RiskReportBuilder::new()
            .confidence(ConfidenceLevel::new(0.80).unwrap())
            .amount(InvestmentAmount::new(500.0).unwrap())
            .bins(10)
            .build(&returns);

        assert_eq!(report.status(), ReportStatus::Complete);
        assert_eq!(report.warning(), None);
        assert_eq!(report.observations, 7);
        assert_eq!(report.first_date, Date::from_ymd(2025, 3, 3).ok());
        assert_eq!(report.last_date, Date::from_ymd(2025, 3, 9).ok());

        let scaled = report.scaled.unwrap();
        assert_relative_eq!(scaled.var, 15.0, epsilon = 1e-9);
        assert_relative_eq!(scaled.expected_shortfall, 25.0, epsilon = 1e-9);
        assert_relative_eq!(report.expected_return.unwrap(), 0.03 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(
            report.scaled_expected_return.unwrap(),
            500.0 * 0.03 / 7.0,
            epsilon = 1e-9
        );

        assert_eq!(report.histogram.len(), 10);
        assert_eq!(report.histogram.total(), 7);
        assert_eq!(report.scaled_histogram.total(), 7);
        assert_relative_eq!(report.markers.var.unwrap(), -0.03, epsilon = 1e-15);
        assert_relative_eq!(report.scaled_markers.var.unwrap(), -15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_data_report() {
        let report = RiskReport::build(
            &ReturnSeries::default(),
            ConfidenceLevel::default(),
            InvestmentAmount::default(),
        );
        assert_eq!(report.status(), ReportStatus::NoData);
        assert!(report.histogram.is_empty());
        assert_eq!(report.expected_return, None);
        assert_eq!(report.scaled, None);
    }

    #[test]
    fn test_insufficient_report() {
        let returns = series(&[0.01, -0.02, 0.03, 0.0, 0.01]);
        let report = RiskReport::build(
            &returns,
            ConfidenceLevel::from_percent(95).unwrap(),
            InvestmentAmount::default(),
        );

        assert_eq!(report.status(), ReportStatus::Insufficient);
        assert_eq!(
            report.warning(),
            Some("Cannot calculate VaR and ES due to insufficient return data.")
        );
        assert_eq!(report.scaled, None);
        assert_eq!(report.markers.var, None);
        // the mean stays available without a tail estimate
        assert!(report.expected_return.is_some());
        assert_eq!(report.histogram.total(), 5);
    }

    #[test]
    fn test_report_serializes() {
        let returns = series(&[-0.05, -0.03, -0.01, 0.00, 0.02, 0.04, 0.06]);
        let report = RiskReport::build(
            &returns,
            ConfidenceLevel::new(0.80).unwrap(),
            InvestmentAmount::default(),
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["observations"], 7);
        assert_eq!(json["estimate"]["status"], "estimated");
        assert_eq!(json["first_date"], "2025-03-03");
    }
}
