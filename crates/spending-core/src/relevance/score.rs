use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::MAX_RELEVANCE_SCORE;

/// Relevance score clamped to [0.0, 10.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RelevanceScore(f64);

impl RelevanceScore {
    /// Best possible score: the story sits exactly on its landmark.
    pub const MAX: f64 = MAX_RELEVANCE_SCORE;
    /// Default highly-relevant threshold.
    pub const HIGH: f64 = 8.0;

    /// Create a new score, clamping to [0.0, 10.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Strictly above `threshold`.
    pub fn is_above(self, threshold: f64) -> bool {
        self.0 > threshold
    }
}

impl fmt::Display for RelevanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<RelevanceScore> for f64 {
    fn from(s: RelevanceScore) -> Self {
        s.0
    }
}
