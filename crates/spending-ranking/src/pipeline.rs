//! Ranking orchestrator.
//!
//! Flow per call:
//! 1. Reject an unusable target amount before touching any story
//! 2. Keep public stories only
//! 3. Evaluate each story (serial, or on the rayon pool for large batches)
//! 4. Collect failures as skipped stories, audit the highly relevant results
//!
//! Listing adds language/score filters and ordering on top of ranking.

use std::time::Instant;

use rayon::prelude::*;
use spending_core::config::{RankingConfig, SortOrder};
use spending_core::errors::{RankingError, StoryError};
use spending_core::traits::IRelevanceEngine;
use spending_core::{RelevanceResult, SpendingConfig, Story};
use spending_observability::ranking_span;
use spending_observability::tracing_setup::events;
use spending_relevance::validation::validate_target;
use spending_relevance::{AccuracyAudit, RelevanceEngine};

use crate::batch::{RankedBatch, RankedStory, SkippedStory};
use crate::filters::{FilterSet, StoryFilter};
use crate::languages::Languages;
use crate::order;
use crate::query::ListingQuery;

type Evaluated = Result<(RankedStory, RelevanceResult), StoryError>;

/// Ranks story batches against a comparison amount.
pub struct RankingPipeline<E: IRelevanceEngine = RelevanceEngine> {
    engine: E,
    config: RankingConfig,
    languages: Languages,
    /// Accuracy tolerance as a percentage, for the audit.
    tolerance_percent: f64,
}

impl RankingPipeline<RelevanceEngine> {
    /// Pipeline with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&SpendingConfig::default())
    }

    pub fn from_config(config: &SpendingConfig) -> Self {
        Self::with_engine(RelevanceEngine::from_config(&config.relevance), config)
    }
}

impl Default for RankingPipeline<RelevanceEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: IRelevanceEngine> RankingPipeline<E> {
    /// Pipeline around a custom engine. Ranking, language and audit settings come from `config`.
    pub fn with_engine(engine: E, config: &SpendingConfig) -> Self {
        Self {
            engine,
            config: config.ranking.clone(),
            languages: Languages::from_config(&config.languages),
            tolerance_percent: config.relevance.accuracy_tolerance * 100.0,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    /// Evaluate every public story against `target_amount`, in listing order.
    ///
    /// Stories that cannot be evaluated are left out of `stories` and reported in
    /// `skipped`. Only an invalid target fails the call.
    pub fn rank(&self, stories: &[Story], target_amount: f64) -> Result<RankedBatch, RankingError> {
        validate_target(target_amount)?;

        let start = Instant::now();
        let public: Vec<&Story> = stories.iter().filter(|s| s.is_public()).collect();
        let span = ranking_span!(target_amount, public.len());
        let _guard = span.enter();

        let evaluated: Vec<Evaluated> = if public.len() >= self.config.parallel_threshold {
            public
                .par_iter()
                .map(|story| self.evaluate(story, target_amount))
                .collect()
        } else {
            public
                .iter()
                .map(|story| self.evaluate(story, target_amount))
                .collect()
        };

        let high_score = self.engine.high_relevance_score();
        let mut batch = RankedBatch {
            target_amount: Some(target_amount),
            stories: Vec::with_capacity(evaluated.len()),
            ..RankedBatch::default()
        };
        let mut audit = AccuracyAudit::new();

        for outcome in evaluated {
            match outcome {
                Ok((ranked, result)) => {
                    if result.is_highly_relevant(high_score) {
                        batch.highly_relevant += 1;
                    }
                    audit.record(&result, high_score, self.tolerance_percent);
                    batch.stories.push(ranked);
                }
                Err(error) => {
                    events::story_skipped(error.story_id(), &error.to_string());
                    batch.skipped.push(SkippedStory::from(error));
                }
            }
        }

        if let (false, Some(worst)) = (audit.is_clean(), audit.worst_percent) {
            events::accuracy_below_tolerance(target_amount, audit.below_tolerance, worst);
        }
        events::batch_ranked(
            target_amount,
            batch.stories.len(),
            batch.skipped.len(),
            batch.highly_relevant,
        );

        batch.audit = audit;
        batch.elapsed = start.elapsed();
        Ok(batch)
    }

    /// Public listing. Without `relevance_for` stories carry no relevance fields
    /// and `min_score` is ignored.
    pub fn list(&self, stories: &[Story], query: &ListingQuery) -> Result<RankedBatch, RankingError> {
        let mut filters = FilterSet::new();
        if let Some(tag) = &query.lang {
            if !self.languages.is_supported(tag) {
                return Err(RankingError::UnsupportedLanguage { tag: tag.clone() });
            }
            filters.push(StoryFilter::LangIs(tag.clone()));
        }

        let mut batch = match query.relevance_for {
            Some(target_amount) => {
                if let Some(threshold) = query.min_score {
                    filters.push(StoryFilter::ScoreAbove(threshold));
                }
                self.rank(stories, target_amount)?
            }
            None => self.unranked(stories),
        };

        filters.apply(&mut batch.stories);
        order::sort(
            &mut batch.stories,
            query.sort.unwrap_or(self.config.default_sort),
        );
        Ok(batch)
    }

    /// Default listing order when a query does not set one.
    pub fn default_sort(&self) -> SortOrder {
        self.config.default_sort
    }

    fn unranked(&self, stories: &[Story]) -> RankedBatch {
        let start = Instant::now();
        let stories = stories
            .iter()
            .filter(|s| s.is_public())
            .cloned()
            .map(RankedStory::plain)
            .collect();
        RankedBatch {
            stories,
            elapsed: start.elapsed(),
            ..RankedBatch::default()
        }
    }

    fn evaluate(&self, story: &Story, target_amount: f64) -> Evaluated {
        let value_usd = story
            .current_value_usd()
            .ok_or_else(|| StoryError::NotNormalized {
                story_id: story.id.clone(),
            })?;
        let result = self
            .engine
            .evaluate(value_usd, story.story_type, target_amount)
            .map_err(|source| StoryError::Relevance {
                story_id: story.id.clone(),
                source,
            })?;
        Ok((RankedStory::with_relevance(story.clone(), &result), result))
    }
}
