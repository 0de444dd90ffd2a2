use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A currency and its exchange rate against the base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Currency {
    /// ISO 4217 code.
    pub iso_code: String,
    pub name: String,
    /// Units of this currency per one base-currency unit.
    pub rate: f64,
}

impl Currency {
    pub fn new(iso_code: impl Into<String>, name: impl Into<String>, rate: f64) -> Self {
        Self {
            iso_code: iso_code.into(),
            name: name.into(),
            rate,
        }
    }

    /// A usable rate is finite and strictly positive.
    pub fn has_valid_rate(&self) -> bool {
        self.rate.is_finite() && self.rate > 0.0
    }

    /// Convert an amount in this currency into the base currency.
    pub fn to_base(&self, amount: f64) -> f64 {
        amount / self.rate
    }
}
