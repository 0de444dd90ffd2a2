use spending_core::errors::NormalizationError;
use spending_core::story::{NormalizedValue, Story};
use spending_core::traits::IInflationIndex;
use spending_observability::normalization_span;
use tracing::{debug, warn};

use crate::currency_table::CurrencyTable;
use crate::inflation::IdentityInflation;

/// Normalization step run when a story is saved.
///
/// `current_value = inflation(value, year, country)` then
/// `current_value_usd = current_value / currency.rate`.
pub struct Normalizer<I: IInflationIndex> {
    index: I,
}

impl<I: IInflationIndex> Normalizer<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Compute the normalized value for the story's current inputs.
    pub fn normalize(
        &self,
        story: &Story,
        currencies: &CurrencyTable,
    ) -> Result<NormalizedValue, NormalizationError> {
        let currency = currencies.resolve(&story.currency)?;
        let adjusted = self.index.adjust(story.value, story.year, &story.country)?;
        let current_value_usd = currency.to_base(adjusted.amount);

        if !adjusted.amount.is_finite() || !current_value_usd.is_finite() {
            return Err(NormalizationError::NonFiniteResult {
                story_id: story.id.clone(),
            });
        }

        debug!(
            story_id = %story.id,
            current_value = adjusted.amount,
            current_value_usd,
            basis_year = adjusted.basis_year,
            "story normalized"
        );

        Ok(NormalizedValue {
            inputs: story.normalization_key(),
            current_value: adjusted.amount,
            current_value_usd,
            inflation_last_year: adjusted.basis_year,
        })
    }

    /// Re-normalize `story` only if it is stale. Returns whether it was recomputed.
    pub fn refresh(
        &self,
        story: &mut Story,
        currencies: &CurrencyTable,
    ) -> Result<bool, NormalizationError> {
        if !story.is_stale() {
            return Ok(false);
        }
        let span = normalization_span!(story.id);
        let _guard = span.enter();

        match self.normalize(story, currencies) {
            Ok(normalized) => {
                story.normalized = Some(normalized);
                Ok(true)
            }
            Err(e) => {
                warn!(error = %e, "story left stale");
                Err(e)
            }
        }
    }

    /// Refresh every stale story. Failures leave the story stale and are returned
    /// as `(story_id, error)` pairs; they never stop the batch.
    pub fn refresh_all(
        &self,
        stories: &mut [Story],
        currencies: &CurrencyTable,
    ) -> Vec<(String, NormalizationError)> {
        stories
            .iter_mut()
            .filter_map(|story| {
                self.refresh(story, currencies)
                    .err()
                    .map(|e| (story.id.clone(), e))
            })
            .collect()
    }
}

impl Default for Normalizer<IdentityInflation> {
    fn default() -> Self {
        Self::new(IdentityInflation)
    }
}
