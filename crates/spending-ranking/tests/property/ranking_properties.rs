use proptest::prelude::*;
use spending_core::config::{RankingConfig, SortOrder};
use spending_core::{NormalizedValue, SpendingConfig, Story, StoryStatus, StoryType};
use spending_ranking::{ListingQuery, RankingPipeline};

fn story(value_usd: f64, yearly: bool, status: StoryStatus, poisoned: bool) -> Story {
    let mut story = Story::new("story", value_usd, 2012, "USA", "USD", "en_GB");
    story.status = status;
    if yearly {
        story.story_type = StoryType::OverOneYear;
    }
    story.normalized = Some(NormalizedValue {
        inputs: story.normalization_key(),
        current_value: value_usd,
        current_value_usd: if poisoned { f64::NAN } else { value_usd },
        inflation_last_year: 2013,
    });
    story
}

fn arb_status() -> impl Strategy<Value = StoryStatus> {
    prop_oneof![
        4 => Just(StoryStatus::Published),
        1 => Just(StoryStatus::Pending),
        1 => Just(StoryStatus::Refused),
    ]
}

fn arb_story() -> impl Strategy<Value = Story> {
    (
        (-2.0f64..13.0).prop_map(|e| 10f64.powf(e)),
        any::<bool>(),
        arb_status(),
        prop::bool::weighted(0.1),
    )
        .prop_map(|(value, yearly, status, poisoned)| story(value, yearly, status, poisoned))
}

fn arb_target() -> impl Strategy<Value = f64> {
    (0.0f64..10.0).prop_map(|e| 10f64.powf(e))
}

fn pipeline(parallel_threshold: usize) -> RankingPipeline {
    RankingPipeline::from_config(&SpendingConfig {
        ranking: RankingConfig {
            parallel_threshold,
            ..RankingConfig::default()
        },
        ..SpendingConfig::default()
    })
}

proptest! {
    #[test]
    fn every_public_story_is_ranked_or_skipped(
        stories in prop::collection::vec(arb_story(), 0..40),
        target in arb_target(),
    ) {
        let batch = pipeline(usize::MAX).rank(&stories, target).unwrap();
        let public = stories.iter().filter(|s| s.is_public()).count();
        prop_assert_eq!(batch.len() + batch.skipped_count(), public);
        prop_assert!(batch.stories.iter().all(|s| s.story.is_public()));
        let all_scores_valid = batch.stories.iter().all(|s| {
            let score = s.score().unwrap();
            (0.0..=10.0).contains(&score) && s.relevance_value.unwrap().is_finite()
        });
        prop_assert!(all_scores_valid);
    }
}

proptest! {
    #[test]
    fn parallel_matches_serial(
        stories in prop::collection::vec(arb_story(), 0..40),
        target in arb_target(),
    ) {
        let serial = pipeline(usize::MAX).rank(&stories, target).unwrap();
        let parallel = pipeline(1).rank(&stories, target).unwrap();
        prop_assert_eq!(serial.stories, parallel.stories);
        prop_assert_eq!(serial.skipped, parallel.skipped);
    }
}

proptest! {
    #[test]
    fn score_order_is_a_sorted_permutation(
        stories in prop::collection::vec(arb_story(), 0..40),
        target in arb_target(),
        threshold in 0.0f64..10.0,
    ) {
        let p = pipeline(usize::MAX);
        let listing = p
            .list(&stories, &ListingQuery::new().relevance_for(target).min_score(threshold))
            .unwrap();
        let sorted = p
            .list(
                &stories,
                &ListingQuery::new()
                    .relevance_for(target)
                    .min_score(threshold)
                    .sort(SortOrder::ScoreDesc),
            )
            .unwrap();

        prop_assert_eq!(listing.len(), sorted.len());
        prop_assert!(sorted.stories.iter().all(|s| s.score().unwrap() > threshold));
        let scores: Vec<f64> = sorted.stories.iter().map(|s| s.score().unwrap()).collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}
