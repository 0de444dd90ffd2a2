use crate::errors::RelevanceError;
use crate::relevance::RelevanceResult;
use crate::story::StoryType;

/// Classify and score a story value against a comparison amount.
pub trait IRelevanceEngine: Send + Sync {
    fn evaluate(
        &self,
        story_value_usd: f64,
        story_type: StoryType,
        target_amount: f64,
    ) -> Result<RelevanceResult, RelevanceError>;

    /// Score above which a result counts as highly relevant.
    fn high_relevance_score(&self) -> f64;
}
