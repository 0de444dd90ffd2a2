use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use spending_core::errors::NormalizationError;
use spending_core::traits::{IInflationIndex, InflationAdjustment};

/// Annual consumer price index series per country.
///
/// `adjust` scales an amount by `cpi[latest] / cpi[year]`, where `latest` is the
/// most recent year in the country's series, and reports `latest` as basis year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CpiInflationIndex {
    series: HashMap<String, BTreeMap<i32, f64>>,
}

impl CpiInflationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"<country>": {"<year>": <cpi>, ...}, ...}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Record the index value of `country` for `year`.
    pub fn insert(&mut self, country: impl Into<String>, year: i32, cpi: f64) {
        self.series
            .entry(country.into())
            .or_default()
            .insert(year, cpi);
    }

    /// Most recent year available for `country`.
    pub fn latest_year(&self, country: &str) -> Option<i32> {
        self.series
            .get(country)
            .and_then(|s| s.keys().next_back().copied())
    }
}

impl IInflationIndex for CpiInflationIndex {
    fn adjust(
        &self,
        amount: f64,
        year: i32,
        country: &str,
    ) -> Result<InflationAdjustment, NormalizationError> {
        let missing = || NormalizationError::MissingIndex {
            country: country.to_string(),
            year,
        };
        let series = self.series.get(country).ok_or_else(missing)?;
        let base = *series.get(&year).ok_or_else(missing)?;
        let (&latest_year, &latest) = series.iter().next_back().ok_or_else(missing)?;
        if !(base.is_finite() && base > 0.0) {
            return Err(missing());
        }

        Ok(InflationAdjustment {
            amount: amount * latest / base,
            basis_year: latest_year,
        })
    }
}
