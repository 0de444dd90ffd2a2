use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::relevance_type::RelevanceType;
use super::score::RelevanceScore;

/// Relevance of one story against one comparison amount. Computed on read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RelevanceResult {
    pub relevance_type: RelevanceType,
    /// Story/amount factor for factor buckets, per-period rate for rate buckets.
    pub value: f64,
    pub score: RelevanceScore,
    /// Reference ratio the story was measured against.
    pub landmark: f64,
    /// Observed ratio: `value / target` for rates, `value` otherwise.
    pub ratio: f64,
}

impl RelevanceResult {
    /// Recover the story's base-currency value from `value`.
    pub fn reverse_story_value(&self, target_amount: f64) -> f64 {
        match self.relevance_type.divisor() {
            Some(divisor) => self.value * divisor,
            None => self.value * target_amount,
        }
    }

    /// How closely the landmark statement holds, in (0, 1].
    pub fn accuracy(&self) -> f64 {
        let a = self.ratio / self.landmark;
        a.min(1.0 / a)
    }

    pub fn is_highly_relevant(&self, threshold: f64) -> bool {
        self.score.is_above(threshold)
    }
}
