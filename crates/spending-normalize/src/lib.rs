//! # spending-normalize
//!
//! Turns a story's raw `(value, year, country, currency)` into an immutable
//! [`NormalizedValue`](spending_core::NormalizedValue): inflation first, then
//! conversion into the base currency.

pub mod currency_table;
pub mod engine;
pub mod inflation;

pub use currency_table::CurrencyTable;
pub use engine::Normalizer;
pub use inflation::{CpiInflationIndex, IdentityInflation};
