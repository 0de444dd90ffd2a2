use std::time::Duration;

use serde::{Deserialize, Serialize};
use spending_core::errors::StoryError;
use spending_core::{RelevanceResult, RelevanceScore, RelevanceType, Story};
use spending_observability::RankingLogEntry;
use spending_relevance::AccuracyAudit;
use ts_rs::TS;

/// A story as exposed by the listing, with its relevance fields when a
/// comparison amount was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedStory {
    #[serde(flatten)]
    pub story: Story,
    pub current_value_usd: Option<f64>,
    pub relevance_type: Option<RelevanceType>,
    pub relevance_value: Option<f64>,
    pub relevance_score: Option<RelevanceScore>,
}

impl RankedStory {
    /// A story listed without a comparison amount.
    pub fn plain(story: Story) -> Self {
        Self {
            current_value_usd: story.current_value_usd(),
            story,
            relevance_type: None,
            relevance_value: None,
            relevance_score: None,
        }
    }

    pub fn with_relevance(story: Story, relevance: &RelevanceResult) -> Self {
        Self {
            current_value_usd: story.current_value_usd(),
            story,
            relevance_type: Some(relevance.relevance_type),
            relevance_value: Some(relevance.value),
            relevance_score: Some(relevance.score),
        }
    }

    pub fn score(&self) -> Option<f64> {
        self.relevance_score.map(RelevanceScore::value)
    }
}

/// A story excluded from a batch, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedStory {
    pub story_id: String,
    pub error: StoryError,
}

impl From<StoryError> for SkippedStory {
    fn from(error: StoryError) -> Self {
        Self {
            story_id: error.story_id().to_string(),
            error,
        }
    }
}

/// Output of one ranking or listing call.
#[derive(Debug, Clone, Default)]
pub struct RankedBatch {
    /// Comparison amount, `None` for plain listings.
    pub target_amount: Option<f64>,
    pub stories: Vec<RankedStory>,
    pub skipped: Vec<SkippedStory>,
    /// Stories scoring above the engine's high-relevance threshold, before filtering.
    pub highly_relevant: usize,
    pub audit: AccuracyAudit,
    pub elapsed: Duration,
}

impl RankedBatch {
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// True when no story was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Summary entry for a [`RankingLog`](spending_observability::RankingLog).
    pub fn log_entry(&self) -> RankingLogEntry {
        RankingLogEntry::new(
            self.target_amount.unwrap_or(0.0),
            self.elapsed,
            self.stories.len(),
            self.skipped.len(),
            self.highly_relevant,
        )
    }
}
