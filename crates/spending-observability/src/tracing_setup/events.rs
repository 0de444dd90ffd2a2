//! Structured log events for the ranking path.

/// Log a story excluded from a ranked batch.
pub fn story_skipped(story_id: &str, reason: &str) {
    tracing::warn!(
        event = "story_skipped",
        story_id = %story_id,
        reason = %reason,
        "story excluded from ranking"
    );
}

/// Log the outcome of a ranked batch.
pub fn batch_ranked(target_amount: f64, ranked: usize, skipped: usize, highly_relevant: usize) {
    tracing::info!(
        event = "batch_ranked",
        target_amount,
        ranked,
        skipped,
        highly_relevant,
        "batch ranked"
    );
}

/// Log highly relevant results whose landmark statement misses tolerance.
pub fn accuracy_below_tolerance(target_amount: f64, count: usize, worst_percent: f64) {
    tracing::warn!(
        event = "accuracy_below_tolerance",
        target_amount,
        count,
        worst_percent,
        "highly relevant results under accuracy tolerance"
    );
}
