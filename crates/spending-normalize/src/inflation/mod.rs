//! Inflation indices implementing [`IInflationIndex`].

pub mod cpi_table;

pub use cpi_table::CpiInflationIndex;

use spending_core::errors::NormalizationError;
use spending_core::traits::{IInflationIndex, InflationAdjustment};

/// No-op index: amounts are taken at face value, basis year is the story year.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityInflation;

impl IInflationIndex for IdentityInflation {
    fn adjust(
        &self,
        amount: f64,
        year: i32,
        _country: &str,
    ) -> Result<InflationAdjustment, NormalizationError> {
        Ok(InflationAdjustment {
            amount,
            basis_year: year,
        })
    }
}
