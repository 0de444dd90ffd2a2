use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::normalized::{NormalizationKey, NormalizedValue};
use super::status::StoryStatus;
use super::story_type::StoryType;

/// A published spending amount, tied to a country, year and currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Story {
    /// UUID v4 identifier.
    pub id: String,
    pub title: String,
    /// Raw spending amount in `currency`.
    pub value: f64,
    /// Start year of the spending.
    pub year: i32,
    /// Country or zone code the money is spent in.
    pub country: String,
    /// ISO 4217 code of the story currency.
    pub currency: String,
    #[serde(rename = "type", default)]
    pub story_type: StoryType,
    #[serde(default)]
    pub status: StoryStatus,
    /// Top story flag.
    #[serde(default)]
    pub sticky: bool,
    /// Language tag, e.g. `fr_FR`.
    pub lang: String,
    pub created_at: DateTime<Utc>,
    /// Free-form extra information.
    #[serde(default)]
    pub extras: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized: Option<NormalizedValue>,
}

impl Story {
    /// Create a pending discrete story with a fresh id and no normalized value.
    pub fn new(
        title: impl Into<String>,
        value: f64,
        year: i32,
        country: impl Into<String>,
        currency: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            value,
            year,
            country: country.into(),
            currency: currency.into(),
            story_type: StoryType::default(),
            status: StoryStatus::default(),
            sticky: false,
            lang: lang.into(),
            created_at: Utc::now(),
            extras: serde_json::Value::Object(Default::default()),
            normalized: None,
        }
    }

    /// The inputs a normalization of this story would use right now.
    pub fn normalization_key(&self) -> NormalizationKey {
        NormalizationKey {
            value: self.value,
            year: self.year,
            country: self.country.clone(),
            currency: self.currency.clone(),
        }
    }

    /// True when the story has no normalized value or its inputs changed since.
    pub fn is_stale(&self) -> bool {
        match &self.normalized {
            Some(n) => n.inputs != self.normalization_key(),
            None => true,
        }
    }

    /// Base-currency value, only while it is current with the story's inputs.
    pub fn current_value_usd(&self) -> Option<f64> {
        if self.is_stale() {
            return None;
        }
        self.normalized.as_ref().map(|n| n.current_value_usd)
    }

    pub fn is_public(&self) -> bool {
        self.status.is_public()
    }
}
