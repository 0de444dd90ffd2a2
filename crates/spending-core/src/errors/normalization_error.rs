/// Inflation and currency normalization errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizationError {
    #[error("unknown currency: {iso_code}")]
    UnknownCurrency { iso_code: String },

    #[error("invalid rate {rate} for currency {iso_code}")]
    InvalidRate { iso_code: String, rate: f64 },

    #[error("no inflation index for {country} in {year}")]
    MissingIndex { country: String, year: i32 },

    #[error("normalization produced a non-finite value for story {story_id}")]
    NonFiniteResult { story_id: String },
}
