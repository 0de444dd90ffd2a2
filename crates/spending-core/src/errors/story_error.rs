use super::RelevanceError;

/// Failure to evaluate a single story inside a batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoryError {
    #[error("story {story_id} has no current normalized value")]
    NotNormalized { story_id: String },

    #[error("story {story_id}: {source}")]
    Relevance {
        story_id: String,
        #[source]
        source: RelevanceError,
    },
}

impl StoryError {
    pub fn story_id(&self) -> &str {
        match self {
            Self::NotNormalized { story_id } | Self::Relevance { story_id, .. } => story_id,
        }
    }
}
