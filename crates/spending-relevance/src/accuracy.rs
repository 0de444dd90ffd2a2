//! Round-trip accuracy audit.
//!
//! A highly relevant result makes a claim ("ten times your amount", "your amount
//! per day"). Accuracy is how well that claim holds: `min(r/l, l/r)` as a
//! percentage. Results under tolerance are counted per batch.

use spending_core::RelevanceResult;

/// Accuracy of a result's landmark statement, in percent.
pub fn accuracy_percent(result: &RelevanceResult) -> f64 {
    result.accuracy() * 100.0
}

/// Running tally over the highly relevant results of a batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccuracyAudit {
    /// Results above the high-relevance threshold.
    pub checked: usize,
    /// Checked results whose accuracy is under tolerance.
    pub below_tolerance: usize,
    /// Lowest accuracy seen among checked results, in percent.
    pub worst_percent: Option<f64>,
}

impl AccuracyAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` if it is highly relevant under `high_score`.
    pub fn record(&mut self, result: &RelevanceResult, high_score: f64, tolerance_percent: f64) {
        if !result.is_highly_relevant(high_score) {
            return;
        }
        let percent = accuracy_percent(result);
        self.checked += 1;
        if percent < tolerance_percent {
            self.below_tolerance += 1;
        }
        self.worst_percent = Some(match self.worst_percent {
            Some(w) => w.min(percent),
            None => percent,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.below_tolerance == 0
    }
}
