//! Equal-width histogram of a return sample.

use serde::{Deserialize, Serialize};

/// A single histogram bin covering `[lower, upper)`.
///
/// The last bin of a histogram also includes its upper edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower edge
    pub lower: f64,
    /// Upper edge
    pub upper: f64,
    /// Number of values in the bin
    pub count: usize,
}

/// Equal-width bins spanning the sample's minimum to maximum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bins in ascending order
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Default bin count for return histograms.
    pub const DEFAULT_BINS: usize = 50;

    /// Bins `values` into `bins` equal-width bins.
    ///
    /// Non-finite values are ignored. An empty sample gives an empty
    /// histogram. A sample whose values are all equal, or whose range is too
    /// narrow to split, gives a single bin.
    /// A bin count of zero is treated as one.
    #[must_use]
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Self::default();
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let bin_count = bins.max(1);
        // max/n - min/n stays finite even when max - min overflows
        let width = max / bin_count as f64 - min / bin_count as f64;
        if max <= min || !(width > 0.0 && width.is_finite()) {
            return Self {
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    count: finite.len(),
                }],
            };
        }

        let mut histogram = Self {
            bins: (0..bin_count)
                .map(|i| HistogramBin {
                    lower: edge(min, max, i, bin_count),
                    upper: if i + 1 == bin_count {
                        max
                    } else {
                        edge(min, max, i + 1, bin_count)
                    },
                    count: 0,
                })
                .collect(),
        };

        for value in finite {
            if let Some(index) = histogram.bin_index(value) {
                histogram.bins[index].count += 1;
            }
        }
        histogram
    }

    /// Index of the bin containing `value`, if it lies within the range.
    #[must_use]
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let first = self.bins.first()?;
        let last = self.bins.last()?;
        if !value.is_finite() || value < first.lower || value > last.upper {
            return None;
        }
        if self.bins.len() == 1 {
            return Some(0);
        }

        let n = self.bins.len() as f64;
        let width = last.upper / n - first.lower / n;
        let raw = (value / width - first.lower / width).floor() as usize;
        Some(raw.min(self.bins.len() - 1))
    }

    /// Number of values binned.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Largest bin count, zero for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns true if there are no bins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

/// Edge `i` of `n` equal bins over `[min, max]`.
fn edge(min: f64, max: f64, i: usize, n: usize) -> f64 {
    let t = i as f64 / n as f64;
    min * (1.0 - t) + max * t
}
