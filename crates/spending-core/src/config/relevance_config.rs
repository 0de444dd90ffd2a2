use serde::{Deserialize, Serialize};

use super::defaults;

/// Relevance classifier and calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    /// Minimum accuracy (0..1) for a landmark statement to count as a match.
    /// Drives the rate-bucket preference order and the score decay width.
    pub accuracy_tolerance: f64,
    /// Score above which a story is considered highly relevant.
    pub high_relevance_score: f64,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            accuracy_tolerance: defaults::DEFAULT_ACCURACY_TOLERANCE,
            high_relevance_score: defaults::DEFAULT_HIGH_RELEVANCE_SCORE,
        }
    }
}
