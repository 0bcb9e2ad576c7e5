//! Observation interval of a price series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Observation frequency of a price series (one price per period).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// One observation per trading day
    #[default]
    Daily,
    /// One observation per week
    Weekly,
    /// One observation per month
    Monthly,
}

impl Interval {
    /// All supported intervals.
    pub const ALL: [Interval; 3] = [Interval::Daily, Interval::Weekly, Interval::Monthly];

    /// Short suffix used in example dataset file names (`MSFT_day.csv`).
    #[must_use]
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Interval::Daily => "day",
            Interval::Weekly => "week",
            Interval::Monthly => "month",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interval::Daily => "Daily",
            Interval::Weekly => "Weekly",
            Interval::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Interval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(Interval::Daily),
            "weekly" | "week" | "w" => Ok(Interval::Weekly),
            "monthly" | "month" | "m" => Ok(Interval::Monthly),
            _ => Err(CoreError::InvalidInterval {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!("Daily".parse::<Interval>().unwrap(), Interval::Daily);
        assert_eq!("week".parse::<Interval>().unwrap(), Interval::Weekly);
        assert_eq!(" MONTHLY ".parse::<Interval>().unwrap(), Interval::Monthly);
        assert!("hourly".parse::<Interval>().is_err());
    }

    #[test]
    fn test_file_suffix_round_trips_through_parse() {
        for interval in Interval::ALL {
            assert_eq!(interval.file_suffix().parse::<Interval>().unwrap(), interval);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::Weekly.to_string(), "Weekly");
    }
}
