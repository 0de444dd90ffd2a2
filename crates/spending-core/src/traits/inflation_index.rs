use crate::errors::NormalizationError;

/// An inflation-adjusted amount and the last year of the index used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InflationAdjustment {
    pub amount: f64,
    pub basis_year: i32,
}

/// Inflation lookup: brings an amount spent in `year` to present-day money.
pub trait IInflationIndex: Send + Sync {
    fn adjust(
        &self,
        amount: f64,
        year: i32,
        country: &str,
    ) -> Result<InflationAdjustment, NormalizationError>;
}
