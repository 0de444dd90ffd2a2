//! Error handling for the relevance engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod normalization_error;
pub mod ranking_error;
pub mod relevance_error;
pub mod story_error;

pub use config_error::ConfigError;
pub use normalization_error::NormalizationError;
pub use ranking_error::RankingError;
pub use relevance_error::RelevanceError;
pub use story_error::StoryError;

/// Top-level error aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SpendingError {
    #[error("relevance error: {0}")]
    Relevance(#[from] RelevanceError),

    #[error("story error: {0}")]
    Story(#[from] StoryError),

    #[error("normalization error: {0}")]
    Normalization(#[from] NormalizationError),

    #[error("ranking error: {0}")]
    Ranking(#[from] RankingError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type SpendingResult<T> = Result<T, SpendingError>;
