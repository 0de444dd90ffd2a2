//! Span definitions per operation: ranking, normalization.

/// Create a ranking span for one batch.
#[macro_export]
macro_rules! ranking_span {
    ($target_amount:expr, $story_count:expr) => {
        tracing::info_span!(
            "spending.ranking",
            target_amount = $target_amount,
            story_count = $story_count
        )
    };
}

/// Create a normalization span for one story.
#[macro_export]
macro_rules! normalization_span {
    ($story_id:expr) => {
        tracing::info_span!("spending.normalization", story_id = %$story_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RANKING: &str = "spending.ranking";
    pub const NORMALIZATION: &str = "spending.normalization";
}
