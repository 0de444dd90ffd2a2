use spending_core::config::defaults::{DEFAULT_ACCURACY_TOLERANCE, DEFAULT_HIGH_RELEVANCE_SCORE};
use spending_core::constants::MAX_RELEVANCE_SCORE;
use spending_core::RelevanceScore;

/// Score decay over log-distance from the landmark.
///
/// ```text
/// score = 10 / (1 + (d / w)²)        d = |ln(ratio / landmark)|
/// w     = -ln(tolerance) / sqrt(10 / high − 1)
/// ```
///
/// `w` is chosen so that the score crosses `high` exactly where accuracy
/// crosses `tolerance`: with 0.97 and 8, a story scores above 8 iff its
/// landmark statement is more than 97% accurate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreDecay {
    width: f64,
}

impl ScoreDecay {
    pub fn new(tolerance: f64, high_relevance_score: f64) -> Self {
        let distance_at_tolerance = -tolerance.ln();
        let width = distance_at_tolerance / (MAX_RELEVANCE_SCORE / high_relevance_score - 1.0).sqrt();
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn raw(&self, log_distance: f64) -> f64 {
        let x = log_distance / self.width;
        MAX_RELEVANCE_SCORE / (1.0 + x * x)
    }

    pub fn score(&self, log_distance: f64) -> RelevanceScore {
        RelevanceScore::new(self.raw(log_distance))
    }
}

impl Default for ScoreDecay {
    fn default() -> Self {
        Self::new(DEFAULT_ACCURACY_TOLERANCE, DEFAULT_HIGH_RELEVANCE_SCORE)
    }
}
