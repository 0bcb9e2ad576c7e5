//! Inclusive date window for selecting returns.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// Inclusive `[start, end]` date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    start: Date,
    end: Date,
}

impl DateWindow {
    /// Days covered by [`DateWindow::trailing_year`].
    pub const TRAILING_YEAR_DAYS: i64 = 365;

    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidWindow` if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::InvalidWindow {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// The 365 days ending at (and including) `end`.
    #[must_use]
    pub fn trailing_year(end: Date) -> Self {
        Self {
            start: end.add_days(-Self::TRAILING_YEAR_DAYS),
            end,
        }
    }

    /// Window start (inclusive).
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Window end (inclusive).
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns true if `date` lies inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::trailing_year(Date::today())
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
