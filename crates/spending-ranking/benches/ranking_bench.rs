use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use spending_core::config::{RankingConfig, SortOrder};
use spending_core::{NormalizedValue, SpendingConfig, Story, StoryStatus, StoryType};
use spending_ranking::{ListingQuery, RankingPipeline};

fn make_stories(n: usize) -> Vec<Story> {
    (0..n)
        .map(|i| {
            let value = 1_000.0 * (1.0 + (i % 997) as f64).powf(2.5);
            let mut story = Story::new(format!("story {i}"), value, 2012, "USA", "USD", "en_GB");
            story.status = StoryStatus::Published;
            if i % 4 == 0 {
                story.story_type = StoryType::OverOneYear;
            }
            story.normalized = Some(NormalizedValue {
                inputs: story.normalization_key(),
                current_value: value,
                current_value_usd: value,
                inflation_last_year: 2013,
            });
            story
        })
        .collect()
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

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    for n in [100, 1_000, 10_000] {
        let stories = make_stories(n);
        let serial = pipeline(usize::MAX);
        let parallel = pipeline(1);
        group.bench_with_input(BenchmarkId::new("serial", n), &stories, |b, s| {
            b.iter(|| serial.rank(s, 1_420_000.0))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &stories, |b, s| {
            b.iter(|| parallel.rank(s, 1_420_000.0))
        });
    }
    group.finish();
}

fn bench_listing(c: &mut Criterion) {
    let stories = make_stories(1_000);
    let p = RankingPipeline::new();
    let query = ListingQuery::new()
        .relevance_for(1_420_000.0)
        .min_score(5.0)
        .sort(SortOrder::ScoreDesc);
    c.bench_function("list_1k_filtered_sorted", |b| b.iter(|| p.list(&stories, &query)));
}

criterion_group!(benches, bench_rank, bench_listing);
criterion_main!(benches);
