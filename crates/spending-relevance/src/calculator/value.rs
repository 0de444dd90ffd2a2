use spending_core::RelevanceType;

use crate::landmarks;

/// Relevance value: the story/amount factor, or the per-period rate.
pub fn relevance_value(story_value_usd: f64, relevance_type: RelevanceType, target_amount: f64) -> f64 {
    match relevance_type.divisor() {
        Some(divisor) => story_value_usd / divisor,
        None => story_value_usd / target_amount,
    }
}

/// Ratio compared against the landmark. Rates are compared to the amount itself.
pub fn observed_ratio(value: f64, relevance_type: RelevanceType, target_amount: f64) -> f64 {
    if relevance_type.is_rate() {
        value / target_amount
    } else {
        value
    }
}

/// Landmark of `relevance_type` nearest to `ratio`.
pub fn landmark(relevance_type: RelevanceType, ratio: f64) -> f64 {
    match relevance_type {
        RelevanceType::Equivalence => 1.0,
        RelevanceType::Multiple => landmarks::multiple_landmark(ratio),
        RelevanceType::Half => landmarks::fraction_landmark(ratio),
        RelevanceType::Day | RelevanceType::Week | RelevanceType::Month => 1.0,
    }
}
