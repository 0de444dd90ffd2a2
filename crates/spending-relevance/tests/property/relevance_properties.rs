use proptest::prelude::*;
use spending_core::traits::IRelevanceEngine;
use spending_core::{RelevanceType, StoryType};
use spending_relevance::{RelevanceCalculator, RelevanceEngine};

fn arb_story_type() -> impl Strategy<Value = StoryType> {
    prop_oneof![Just(StoryType::Discrete), Just(StoryType::OverOneYear)]
}

fn arb_relevance_type() -> impl Strategy<Value = RelevanceType> {
    prop::sample::select(RelevanceType::ALL.to_vec())
}

/// Positive finite amounts spanning cents to trillions.
fn arb_amount() -> impl Strategy<Value = f64> {
    (-2.0f64..13.0).prop_map(|e| 10f64.powf(e))
}

// ── Totality ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn classification_is_total_and_deterministic(
        story in arb_amount(),
        target in arb_amount(),
        story_type in arb_story_type(),
    ) {
        let engine = RelevanceEngine::new();
        let first = engine.evaluate(story, story_type, target);
        prop_assert!(first.is_ok(), "{:?}", first);
        let second = engine.evaluate(story, story_type, target);
        prop_assert_eq!(first.unwrap(), second.unwrap());
    }
}

proptest! {
    #[test]
    fn yearly_stories_are_always_rates(
        story in arb_amount(),
        target in arb_amount(),
    ) {
        let r = RelevanceEngine::new()
            .evaluate(story, StoryType::OverOneYear, target)
            .unwrap();
        prop_assert!(r.relevance_type.is_rate());
        let r = RelevanceEngine::new()
            .evaluate(story, StoryType::Discrete, target)
            .unwrap();
        prop_assert!(!r.relevance_type.is_rate());
    }
}

// ── Bounds ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_bounded_zero_to_ten(
        story in arb_amount(),
        target in arb_amount(),
        relevance_type in arb_relevance_type(),
    ) {
        let c = RelevanceCalculator::default()
            .compute(story, relevance_type, target)
            .unwrap();
        prop_assert!((0.0..=10.0).contains(&c.score.value()), "{}", c.score);
        prop_assert!(c.value.is_finite());
    }
}

// ── Round trip ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn value_reverses_within_tolerance(
        story in arb_amount(),
        target in arb_amount(),
        story_type in arb_story_type(),
    ) {
        let r = RelevanceEngine::new().evaluate(story, story_type, target).unwrap();
        let reversed = r.reverse_story_value(target);
        let accuracy = reversed.min(story) / reversed.max(story);
        prop_assert!(accuracy >= 0.97, "{:?}: {} vs {}", r.relevance_type, reversed, story);
    }
}

// ── Threshold ↔ accuracy ────────────────────────────────────────────────

proptest! {
    #[test]
    fn highly_relevant_means_accurate(
        story in arb_amount(),
        target in arb_amount(),
        story_type in arb_story_type(),
    ) {
        let r = RelevanceEngine::new().evaluate(story, story_type, target).unwrap();
        if r.is_highly_relevant(8.0) {
            prop_assert!(r.accuracy() > 0.97 - 1e-9, "score {} accuracy {}", r.score, r.accuracy());
        } else {
            prop_assert!(r.accuracy() <= 0.97 + 1e-9, "score {} accuracy {}", r.score, r.accuracy());
        }
    }
}

// ── Log symmetry ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn equivalence_score_symmetric_in_log_ratio(
        factor in 1.0f64..50.0,
        target in arb_amount(),
    ) {
        let calculator = RelevanceCalculator::default();
        let over = calculator.compute(target * factor, RelevanceType::Equivalence, target).unwrap();
        let under = calculator.compute(target / factor, RelevanceType::Equivalence, target).unwrap();
        prop_assert!((over.score.value() - under.score.value()).abs() < 1e-6);
    }
}
