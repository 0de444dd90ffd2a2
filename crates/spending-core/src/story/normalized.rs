use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The story fields a normalized value was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizationKey {
    pub value: f64,
    pub year: i32,
    pub country: String,
    pub currency: String,
}

/// Inflation-adjusted, base-currency figures for a story.
///
/// Immutable once computed. A story whose inputs no longer match `inputs`
/// must be re-normalized before it can be ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedValue {
    pub inputs: NormalizationKey,
    /// Inflation-adjusted value in the story's own currency.
    pub current_value: f64,
    /// `current_value` converted into the base currency.
    pub current_value_usd: f64,
    /// Last year covered by the inflation index used.
    pub inflation_last_year: i32,
}
