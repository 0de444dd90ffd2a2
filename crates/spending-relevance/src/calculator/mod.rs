//! Relevance calculator: value and score for a given relevance type.

pub mod score;
pub mod value;

pub use score::ScoreDecay;

use spending_core::errors::RelevanceError;
use spending_core::{RelevanceScore, RelevanceType};

use crate::landmarks;
use crate::validation;

/// Value and score of one comparison, with the intermediate terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Computation {
    pub value: f64,
    pub score: RelevanceScore,
    pub landmark: f64,
    pub ratio: f64,
    pub log_distance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RelevanceCalculator {
    decay: ScoreDecay,
}

impl RelevanceCalculator {
    pub fn new(decay: ScoreDecay) -> Self {
        Self { decay }
    }

    pub fn decay(&self) -> &ScoreDecay {
        &self.decay
    }

    /// Compute value and score of `story_value_usd` as `relevance_type` of `target_amount`.
    pub fn compute(
        &self,
        story_value_usd: f64,
        relevance_type: RelevanceType,
        target_amount: f64,
    ) -> Result<Computation, RelevanceError> {
        validation::validate_inputs(story_value_usd, target_amount)?;

        let value = value::relevance_value(story_value_usd, relevance_type, target_amount);
        if !value.is_finite() {
            return Err(RelevanceError::computation(format!(
                "{relevance_type} value is not finite: {value}"
            )));
        }
        let ratio =
            validation::check_ratio(value::observed_ratio(value, relevance_type, target_amount))?;
        let landmark = value::landmark(relevance_type, ratio);
        let log_distance = landmarks::log_distance(ratio, landmark);

        let raw = self.decay.raw(log_distance);
        if !raw.is_finite() {
            return Err(RelevanceError::computation(format!(
                "{relevance_type} score is not finite: {raw}"
            )));
        }

        Ok(Computation {
            value,
            score: RelevanceScore::new(raw),
            landmark,
            ratio,
            log_distance,
        })
    }
}
