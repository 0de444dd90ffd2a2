use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use spending_core::errors::NormalizationError;
use spending_core::constants::BASE_CURRENCY;
use spending_core::Currency;
use tracing::{debug, info, warn};

/// Known currencies keyed by ISO code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyTable {
    currencies: HashMap<String, Currency>,
}

impl CurrencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a list of currencies. Later entries win on duplicate codes.
    pub fn from_currencies(currencies: impl IntoIterator<Item = Currency>) -> Self {
        let mut table = Self::new();
        for currency in currencies {
            table.insert(currency);
        }
        table
    }

    /// Parse a JSON array of currencies.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let currencies: Vec<Currency> = serde_json::from_str(json)?;
        Ok(Self::from_currencies(currencies))
    }

    pub fn insert(&mut self, currency: Currency) {
        self.currencies.insert(currency.iso_code.clone(), currency);
    }

    pub fn get(&self, iso_code: &str) -> Option<&Currency> {
        self.currencies.get(iso_code)
    }

    /// Look up a currency whose rate can be used for conversion.
    pub fn resolve(&self, iso_code: &str) -> Result<&Currency, NormalizationError> {
        let currency = self
            .get(iso_code)
            .ok_or_else(|| NormalizationError::UnknownCurrency {
                iso_code: iso_code.to_string(),
            })?;
        if !currency.has_valid_rate() {
            return Err(NormalizationError::InvalidRate {
                iso_code: iso_code.to_string(),
                rate: currency.rate,
            });
        }
        Ok(currency)
    }

    /// The base currency, if the table carries it.
    pub fn base(&self) -> Option<&Currency> {
        self.get(BASE_CURRENCY)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Apply freshly fetched rates (ISO code → units per base unit).
    ///
    /// Returns the number of currencies whose rate changed. Currencies missing
    /// from `rates` keep their rate; invalid rates are skipped. The base
    /// currency is pinned to its own rate.
    pub fn apply_rates(&mut self, rates: &HashMap<String, f64>) -> usize {
        let mut updated = 0;
        for currency in self.currencies.values_mut() {
            if currency.iso_code == BASE_CURRENCY {
                continue;
            }
            let Some(&new_rate) = rates.get(&currency.iso_code) else {
                debug!(iso_code = %currency.iso_code, "no fresh rate, keeping current");
                continue;
            };
            if !new_rate.is_finite() || new_rate <= 0.0 {
                warn!(iso_code = %currency.iso_code, rate = new_rate, "ignoring invalid rate");
                continue;
            }
            if new_rate != currency.rate {
                currency.rate = new_rate;
                updated += 1;
            }
        }
        info!(updated, total = self.currencies.len(), "currency rates refreshed");
        updated
    }
}
