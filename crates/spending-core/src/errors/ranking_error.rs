use super::RelevanceError;

/// Caller-level ranking errors. Per-story failures never surface here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("invalid target amount: {0}")]
    InvalidTarget(#[from] RelevanceError),

    #[error("unsupported language: {tag}")]
    UnsupportedLanguage { tag: String },
}
