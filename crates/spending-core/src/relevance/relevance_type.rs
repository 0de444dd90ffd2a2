use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::{DAYS_PER_YEAR, MONTHS_PER_YEAR, WEEKS_PER_YEAR};

/// How a story's value relates to the user's comparison amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceType {
    /// The story is a whole multiple (two or more) of the amount.
    Multiple,
    /// The story is about the same as the amount.
    Equivalence,
    /// The story is a unit fraction (half, third, ...) of the amount.
    Half,
    /// The yearly story amount spent per day.
    Day,
    /// The yearly story amount spent per week.
    Week,
    /// The yearly story amount spent per month.
    Month,
}

impl RelevanceType {
    pub const ALL: [RelevanceType; 6] = [
        Self::Multiple,
        Self::Equivalence,
        Self::Half,
        Self::Day,
        Self::Week,
        Self::Month,
    ];

    /// Rate buckets in preference order.
    pub const RATES: [RelevanceType; 3] = [Self::Day, Self::Week, Self::Month];

    /// Periods per year for rate buckets, `None` for factor buckets.
    pub fn divisor(self) -> Option<f64> {
        match self {
            Self::Day => Some(DAYS_PER_YEAR),
            Self::Week => Some(WEEKS_PER_YEAR),
            Self::Month => Some(MONTHS_PER_YEAR),
            Self::Multiple | Self::Equivalence | Self::Half => None,
        }
    }

    pub fn is_rate(self) -> bool {
        self.divisor().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Multiple => "multiple",
            Self::Equivalence => "equivalence",
            Self::Half => "half",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for RelevanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
