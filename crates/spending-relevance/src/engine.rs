use spending_core::config::RelevanceConfig;
use spending_core::errors::RelevanceError;
use spending_core::traits::IRelevanceEngine;
use spending_core::{RelevanceResult, StoryType};
use tracing::debug;

use crate::calculator::{RelevanceCalculator, ScoreDecay};
use crate::classifier::RelevanceClassifier;

/// Classifier followed by calculator, sharing one tolerance.
pub struct RelevanceEngine {
    classifier: RelevanceClassifier,
    calculator: RelevanceCalculator,
    high_relevance_score: f64,
}

impl RelevanceEngine {
    /// Create an engine with the default tolerance (0.97) and threshold (8.0).
    pub fn new() -> Self {
        Self::from_config(&RelevanceConfig::default())
    }

    pub fn from_config(config: &RelevanceConfig) -> Self {
        Self {
            classifier: RelevanceClassifier::new(config.accuracy_tolerance),
            calculator: RelevanceCalculator::new(ScoreDecay::new(
                config.accuracy_tolerance,
                config.high_relevance_score,
            )),
            high_relevance_score: config.high_relevance_score,
        }
    }

    pub fn classifier(&self) -> &RelevanceClassifier {
        &self.classifier
    }

    pub fn calculator(&self) -> &RelevanceCalculator {
        &self.calculator
    }
}

impl Default for RelevanceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IRelevanceEngine for RelevanceEngine {
    fn evaluate(
        &self,
        story_value_usd: f64,
        story_type: StoryType,
        target_amount: f64,
    ) -> Result<RelevanceResult, RelevanceError> {
        let classification = self
            .classifier
            .classify(story_value_usd, story_type, target_amount)?;
        let computation = self.calculator.compute(
            story_value_usd,
            classification.relevance_type,
            target_amount,
        )?;

        debug!(
            story_value_usd,
            target_amount,
            %story_type,
            relevance_type = %classification.relevance_type,
            landmark = computation.landmark,
            score = computation.score.value(),
            "relevance evaluated"
        );

        Ok(RelevanceResult {
            relevance_type: classification.relevance_type,
            value: computation.value,
            score: computation.score,
            landmark: computation.landmark,
            ratio: computation.ratio,
        })
    }

    fn high_relevance_score(&self) -> f64 {
        self.high_relevance_score
    }
}
