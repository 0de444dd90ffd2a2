mod common;

use common::{discrete, published};
use spending_core::config::{LanguageConfig, LanguageEntry, RankingConfig, SortOrder};
use spending_core::errors::RankingError;
use spending_core::{SpendingConfig, StoryStatus, StoryType};
use spending_ranking::{FilterSet, Languages, ListingQuery, RankingPipeline, StoryFilter};

const TARGET: f64 = 1_000_000.0;

// ── Without a comparison amount ─────────────────────────────────────────

#[test]
fn plain_listing_has_no_relevance_fields() {
    let mut pending = discrete(TARGET);
    pending.status = StoryStatus::Pending;
    let stories = vec![discrete(TARGET), pending, discrete(3.0 * TARGET)];

    let batch = RankingPipeline::new()
        .list(&stories, &ListingQuery::new().min_score(9.0))
        .unwrap();

    assert_eq!(batch.target_amount, None);
    assert_eq!(batch.len(), 2);
    for ranked in &batch.stories {
        assert!(ranked.relevance_type.is_none());
        assert!(ranked.relevance_value.is_none());
        assert!(ranked.relevance_score.is_none());
        assert_eq!(ranked.current_value_usd, Some(ranked.story.value));
    }
}

// ── Filters ─────────────────────────────────────────────────────────────

#[test]
fn score_filter_is_strict() {
    let stories = vec![discrete(TARGET * 1.3), discrete(TARGET)];
    let pipeline = RankingPipeline::new();
    let ranked = pipeline.rank(&stories, TARGET).unwrap();
    let off_landmark = ranked.stories[0].score().unwrap();
    assert!(off_landmark < 10.0);

    let at = pipeline
        .list(&stories, &ListingQuery::new().relevance_for(TARGET).min_score(off_landmark))
        .unwrap();
    assert_eq!(at.len(), 1);
    assert_eq!(at.stories[0].story.id, stories[1].id);

    let below = pipeline
        .list(
            &stories,
            &ListingQuery::new()
                .relevance_for(TARGET)
                .min_score(off_landmark - 1e-9),
        )
        .unwrap();
    assert_eq!(below.len(), 2);
}

#[test]
fn filters_compose_with_and() {
    let stories = vec![
        published(TARGET, StoryType::Discrete, "fr_FR"),
        published(TARGET * 1.3, StoryType::Discrete, "fr_FR"),
        published(TARGET, StoryType::Discrete, "en_GB"),
    ];
    let batch = RankingPipeline::new()
        .list(
            &stories,
            &ListingQuery::new()
                .relevance_for(TARGET)
                .min_score(9.5)
                .lang("fr_FR"),
        )
        .unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.stories[0].story.id, stories[0].id);
    // Counted before filtering.
    assert_eq!(batch.highly_relevant, 2);
}

#[test]
fn filter_set_without_filters_keeps_everything() {
    let stories = vec![discrete(TARGET), discrete(2.0 * TARGET)];
    let mut batch = RankingPipeline::new().rank(&stories, TARGET).unwrap();
    let filters = FilterSet::new();
    assert!(filters.is_empty());
    filters.apply(&mut batch.stories);
    assert_eq!(batch.len(), 2);

    let lang_only = FilterSet::new().and(StoryFilter::LangIs("es_ES".into()));
    assert!(!lang_only.matches(&batch.stories[0]));
}

#[test]
fn score_filter_never_matches_unscored_story() {
    let batch = RankingPipeline::new()
        .list(&[discrete(TARGET)], &ListingQuery::new())
        .unwrap();
    assert!(!StoryFilter::ScoreAbove(-1.0).matches(&batch.stories[0]));
}

#[test]
fn unsupported_language_fails_listing() {
    let err = RankingPipeline::new()
        .list(&[discrete(TARGET)], &ListingQuery::new().lang("de_DE"))
        .unwrap_err();
    assert_eq!(
        err,
        RankingError::UnsupportedLanguage {
            tag: "de_DE".into()
        }
    );
}

#[test]
fn invalid_target_fails_listing() {
    let err = RankingPipeline::new()
        .list(&[discrete(TARGET)], &ListingQuery::new().relevance_for(0.0))
        .unwrap_err();
    assert!(matches!(err, RankingError::InvalidTarget(_)));
}

// ── Ordering ────────────────────────────────────────────────────────────

#[test]
fn score_order_is_stable_descending() {
    let stories = vec![
        discrete(TARGET * 1.3),
        discrete(TARGET),
        discrete(TARGET * 1.3),
        discrete(TARGET),
    ];
    let batch = RankingPipeline::new()
        .list(
            &stories,
            &ListingQuery::new()
                .relevance_for(TARGET)
                .sort(SortOrder::ScoreDesc),
        )
        .unwrap();

    let ids: Vec<_> = batch.stories.iter().map(|s| s.story.id.as_str()).collect();
    let expected = [&stories[1].id, &stories[3].id, &stories[0].id, &stories[2].id];
    assert_eq!(ids, expected.map(String::as_str));
}

#[test]
fn default_sort_comes_from_config() {
    let config = SpendingConfig {
        ranking: RankingConfig {
            default_sort: SortOrder::ScoreDesc,
            ..RankingConfig::default()
        },
        ..SpendingConfig::default()
    };
    let pipeline = RankingPipeline::from_config(&config);
    assert_eq!(pipeline.default_sort(), SortOrder::ScoreDesc);

    let stories = vec![discrete(TARGET * 1.3), discrete(TARGET)];
    let sorted = pipeline
        .list(&stories, &ListingQuery::new().relevance_for(TARGET))
        .unwrap();
    assert_eq!(sorted.stories[0].story.id, stories[1].id);

    let listing = pipeline
        .list(
            &stories,
            &ListingQuery::new()
                .relevance_for(TARGET)
                .sort(SortOrder::Listing),
        )
        .unwrap();
    assert_eq!(listing.stories[0].story.id, stories[0].id);
}

// ── Languages ───────────────────────────────────────────────────────────

#[test]
fn language_tags_are_validated() {
    for tag in ["en", "en_GB", "fr_FR"] {
        assert!(Languages::is_well_formed(tag), "{tag}");
    }
    for tag in ["", "EN", "en_gb", "eng_GB", "en-GB", "en_GBR"] {
        assert!(!Languages::is_well_formed(tag), "{tag}");
    }
}

#[test]
fn default_catalogue_lists_configured_languages() {
    let languages = Languages::default();
    assert_eq!(languages.default_language(), "en_GB");
    assert_eq!(
        languages.filter_listing().lang,
        vec!["en_GB", "fr_FR", "es_ES"]
    );
    assert_eq!(languages.name("fr_FR"), Some("French"));
    assert!(!languages.is_supported("de_DE"));
}

#[test]
fn malformed_configured_tags_are_dropped() {
    let config = LanguageConfig {
        default: "en_GB".into(),
        supported: vec![
            LanguageEntry {
                code: "en_GB".into(),
                name: "English".into(),
            },
            LanguageEntry {
                code: "klingon".into(),
                name: "Klingon".into(),
            },
        ],
    };
    let languages = Languages::from_config(&config);
    assert_eq!(languages.list().len(), 1);
    assert!(!languages.is_supported("klingon"));
}
