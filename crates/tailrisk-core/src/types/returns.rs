//! Return series.

use serde::{Deserialize, Serialize};

use super::{Date, DateWindow};

/// A fractional return for one period (-0.03 is a 3% loss), dated at the
/// period's closing observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedReturn {
    /// Date of the observation that closes the period
    pub date: Date,
    /// Fractional change over the period
    pub value: f64,
}

impl DatedReturn {
    /// Creates a dated return.
    #[must_use]
    pub fn new(date: Date, value: f64) -> Self {
        Self { date, value }
    }
}

/// Chronologically indexed returns. May be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnSeries {
    returns: Vec<DatedReturn>,
}

impl ReturnSeries {
    /// Wraps returns in the order given.
    #[must_use]
    pub fn new(returns: Vec<DatedReturn>) -> Self {
        Self { returns }
    }

    /// Number of returns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Returns true if there are no returns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Iterates over dated returns.
    pub fn iter(&self) -> std::slice::Iter<'_, DatedReturn> {
        self.returns.iter()
    }

    /// The return values without dates, in series order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.returns.iter().map(|r| r.value).collect()
    }

    /// Date of the first return.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.returns.first().map(|r| r.date)
    }

    /// Date of the last return.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.returns.last().map(|r| r.date)
    }

    /// Returns dated inside the inclusive window.
    #[must_use]
    pub fn within(&self, window: &DateWindow) -> ReturnSeries {
        Self::new(
            self.returns
                .iter()
                .filter(|r| window.contains(r.date))
                .copied()
                .collect(),
        )
    }

    /// Arithmetic mean of the returns, `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.returns.is_empty() {
            return None;
        }
        let sum: f64 = self.returns.iter().map(|r| r.value).sum();
        Some(sum / self.returns.len() as f64)
    }

    /// Every return multiplied by `factor`, dates unchanged.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> ReturnSeries {
        Self::new(
            self.returns
                .iter()
                .map(|r| DatedReturn::new(r.date, r.value * factor))
                .collect(),
        )
    }
}

impl FromIterator<DatedReturn> for ReturnSeries {
    fn from_iter<I: IntoIterator<Item = DatedReturn>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReturnSeries {
    type Item = &'a DatedReturn;
    type IntoIter = std::slice::Iter<'a, DatedReturn>;

    fn into_iter(self) -> Self::IntoIter {
        self.returns.iter()
    }
}
