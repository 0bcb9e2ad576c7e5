//! Price observations and price series.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Date, DatedReturn, ReturnSeries};
use crate::error::{CoreError, CoreResult};

/// Which price column drives the return calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceField {
    /// Close adjusted for splits and dividends
    AdjustedClose,
    /// Raw close
    Close,
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceField::AdjustedClose => write!(f, "Adj Close"),
            PriceField::Close => write!(f, "Close"),
        }
    }
}

/// One period of OHLCV data.
///
/// Every field except the date may be missing; a missing value is `None`,
/// never `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Observation date
    pub date: Date,
    /// Opening price
    pub open: Option<f64>,
    /// High price
    pub high: Option<f64>,
    /// Low price
    pub low: Option<f64>,
    /// Closing price
    pub close: Option<f64>,
    /// Adjusted closing price
    pub adj_close: Option<f64>,
    /// Traded volume
    pub volume: Option<f64>,
}

impl PriceObservation {
    /// Creates an observation with no prices.
    #[must_use]
    pub fn new(date: Date) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close: None,
            adj_close: None,
            volume: None,
        }
    }

    /// Sets the close price.
    #[must_use]
    pub fn with_close(mut self, close: f64) -> Self {
        self.close = Some(close);
        self
    }

    /// Sets the adjusted close price.
    #[must_use]
    pub fn with_adj_close(mut self, adj_close: f64) -> Self {
        self.adj_close = Some(adj_close);
        self
    }

    /// Returns the price for the given field.
    #[must_use]
    pub fn price(&self, field: PriceField) -> Option<f64> {
        match field {
            PriceField::AdjustedClose => self.adj_close,
            PriceField::Close => self.close,
        }
    }
}

/// A chronologically ordered series of price observations with unique dates.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    observations: Vec<PriceObservation>,
}

impl PriceSeries {
    /// Builds a series, sorting observations ascending by date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateObservation` if two observations share a date.
    pub fn new(mut observations: Vec<PriceObservation>) -> CoreResult<Self> {
        observations.sort_by_key(|o| o.date);
        if let Some(pair) = observations.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(CoreError::DuplicateObservation {
                date: pair[0].date.to_string(),
            });
        }
        Ok(Self { observations })
    }

    /// Returns the observations in date order.
    #[must_use]
    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Date of the first observation.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.observations.first().map(|o| o.date)
    }

    /// Date of the last observation.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.observations.last().map(|o| o.date)
    }

    /// The column returns are computed from.
    ///
    /// Adjusted close when any observation carries one, otherwise close. The
    /// choice is made once for the whole series so returns never mix the two.
    #[must_use]
    pub fn reference_field(&self) -> PriceField {
        if self.observations.iter().any(|o| o.adj_close.is_some()) {
            PriceField::AdjustedClose
        } else {
            PriceField::Close
        }
    }

    /// Period-over-period fractional returns of the reference price.
    ///
    /// Each return is `(p[t] - p[t-1]) / p[t-1]` dated at `t`. The first
    /// priced observation has no predecessor and yields nothing. Observations
    /// without a reference price are skipped, so the change is taken against
    /// the last priced observation before them.
    #[must_use]
    pub fn returns(&self) -> ReturnSeries {
        let field = self.reference_field();
        let mut returns = Vec::with_capacity(self.len().saturating_sub(1));
        let mut previous: Option<f64> = None;

        for obs in &self.observations {
            let Some(price) = obs.price(field) else {
                continue;
            };
            if let Some(prev) = previous {
                if prev > 0.0 {
                    returns.push(DatedReturn::new(obs.date, (price - prev) / prev));
                } else {
                    warn!(
                        "skipping return on {}: previous {} price {} is not positive",
                        obs.date, field, prev
                    );
                }
            }
            previous = Some(price);
        }

        ReturnSeries::new(returns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DateWindow;
    use approx::assert_relative_eq;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn close_series(points: &[(&str, f64)]) -> PriceSeries {
        PriceSeries::new(
            points
                .iter()
                .map(|(d, p)| PriceObservation::new(date(d)).with_close(*p))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_first_return_dropped() {
        let series = close_series(&[
            ("2025-01-02", 100.0),
            ("2025-01-03", 110.0),
            ("2025-01-06", 99.0),
        ]);
        let returns = series.returns();
        assert_eq!(returns.len(), 2);
        assert_eq!(returns.iter().next().unwrap().date, date("2025-01-03"));
        assert_relative_eq!(returns.values()[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(returns.values()[1], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let series = close_series(&[("2025-01-06", 121.0), ("2025-01-02", 100.0), ("2025-01-03", 110.0)]);
        assert_eq!(series.first_date(), Some(date("2025-01-02")));
        assert_eq!(series.last_date(), Some(date("2025-01-06")));
        let values = series.returns().values();
        assert_relative_eq!(values[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(values[1], 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_duplicate_dates_rejected() {
        let result = PriceSeries::new(vec![
            PriceObservation::new(date("2025-01-02")).with_close(1.0),
            PriceObservation::new(date("2025-01-02")).with_close(2.0),
        ]);
        assert!(matches!(result, Err(CoreError::DuplicateObservation { .. })));
    }

    #[test]
    fn test_adjusted_close_preferred() {
        let series = PriceSeries::new(vec![
            PriceObservation::new(date("2025-01-02"))
                .with_close(200.0)
                .with_adj_close(100.0),
            PriceObservation::new(date("2025-01-03"))
                .with_close(100.0)
                .with_adj_close(105.0),
        ])
        .unwrap();
        assert_eq!(series.reference_field(), PriceField::AdjustedClose);
        assert_relative_eq!(series.returns().values()[0], 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_prices_bridge_to_previous() {
        let series = PriceSeries::new(vec![
            PriceObservation::new(date("2025-01-02")).with_close(100.0),
            PriceObservation::new(date("2025-01-03")),
            PriceObservation::new(date("2025-01-06")).with_close(90.0),
        ])
        .unwrap();
        let returns = series.returns();
        assert_eq!(returns.len(), 1);
        assert_eq!(returns.first_date(), Some(date("2025-01-06")));
        assert_relative_eq!(returns.values()[0], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_previous_price_skipped() {
        let series = close_series(&[("2025-01-02", 0.0), ("2025-01-03", 10.0), ("2025-01-06", 11.0)]);
        let returns = series.returns();
        assert_eq!(returns.len(), 1);
        assert_relative_eq!(returns.values()[0], 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_single_and_empty_series() {
        assert!(PriceSeries::default().returns().is_empty());
        assert!(close_series(&[("2025-01-02", 100.0)]).returns().is_empty());
    }

    #[test]
    fn test_first_windowed_return_uses_price_before_window() {
        let series = close_series(&[
            ("2024-12-31", 100.0),
            ("2025-01-02", 90.0),
            ("2025-01-03", 99.0),
        ]);
        let window = DateWindow::new(date("2025-01-01"), date("2025-01-03")).unwrap();
        let returns = series.returns().within(&window);

        assert_eq!(returns.len(), 2);
        assert_eq!(returns.first_date(), Some(date("2025-01-02")));
        let values = returns.values();
        assert_relative_eq!(values[0], -0.10, epsilon = 1e-12);
        assert_relative_eq!(values[1], 0.10, epsilon = 1e-12);
    }
}
