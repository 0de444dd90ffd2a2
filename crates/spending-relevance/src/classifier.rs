//! Relevance classifier: picks exactly one [`RelevanceType`] per comparison.
//!
//! Policy, first match wins:
//! 1. `OverOneYear` stories are cut into rates. Day, week and month are tried in
//!    that order; the first whose rate is within tolerance of the amount wins,
//!    otherwise the rate nearest in log space (ties keep preference order).
//! 2. `Discrete` stories are compared whole. At or above the amount, the nearest
//!    integer multiple in log space (1 is equivalence). Below it, the nearest
//!    unit fraction (1/1 is equivalence, 1/2 and beyond are half).

use spending_core::config::defaults::DEFAULT_ACCURACY_TOLERANCE;
use spending_core::constants::{DAYS_PER_YEAR, MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use spending_core::errors::RelevanceError;
use spending_core::{RelevanceType, StoryType};

use crate::landmarks;
use crate::validation;

/// Rate buckets in preference order.
const RATE_BUCKETS: [(RelevanceType, f64); 3] = [
    (RelevanceType::Day, DAYS_PER_YEAR),
    (RelevanceType::Week, WEEKS_PER_YEAR),
    (RelevanceType::Month, MONTHS_PER_YEAR),
];

/// Outcome of classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub relevance_type: RelevanceType,
    /// Landmark the ratio was matched to.
    pub landmark: f64,
    /// `story / target` for factor types, `(story / divisor) / target` for rates.
    pub ratio: f64,
}

/// Deterministic, total classifier over valid inputs.
#[derive(Debug, Clone)]
pub struct RelevanceClassifier {
    tolerance: f64,
}

impl RelevanceClassifier {
    /// `tolerance` is the minimum accuracy (0..1) for a rate to win on preference order.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn classify(
        &self,
        story_value_usd: f64,
        story_type: StoryType,
        target_amount: f64,
    ) -> Result<Classification, RelevanceError> {
        validation::validate_inputs(story_value_usd, target_amount)?;

        match story_type {
            StoryType::Discrete => {
                let ratio = validation::check_ratio(story_value_usd / target_amount)?;
                Ok(classify_discrete(ratio))
            }
            StoryType::OverOneYear => self.classify_rate(story_value_usd, target_amount),
        }
    }

    fn classify_rate(
        &self,
        story_value_usd: f64,
        target_amount: f64,
    ) -> Result<Classification, RelevanceError> {
        let mut best: Option<(Classification, f64)> = None;

        for (relevance_type, divisor) in RATE_BUCKETS {
            let ratio = validation::check_ratio(story_value_usd / divisor / target_amount)?;
            let candidate = Classification {
                relevance_type,
                landmark: 1.0,
                ratio,
            };
            if landmarks::accuracy(ratio, 1.0) >= self.tolerance {
                return Ok(candidate);
            }
            let distance = landmarks::log_distance(ratio, 1.0);
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((candidate, distance)),
            }
        }

        best.map(|(c, _)| c)
            .ok_or_else(|| RelevanceError::computation("no rate bucket available"))
    }
}

impl Default for RelevanceClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_ACCURACY_TOLERANCE)
    }
}

fn classify_discrete(ratio: f64) -> Classification {
    let (relevance_type, landmark) = if ratio >= 1.0 {
        match landmarks::nearest_integer(ratio) {
            n if n <= 1.0 => (RelevanceType::Equivalence, 1.0),
            n => (RelevanceType::Multiple, n),
        }
    } else {
        match landmarks::nearest_integer(1.0 / ratio) {
            m if m <= 1.0 => (RelevanceType::Equivalence, 1.0),
            m => (RelevanceType::Half, 1.0 / m),
        }
    };

    Classification {
        relevance_type,
        landmark,
        ratio,
    }
}
