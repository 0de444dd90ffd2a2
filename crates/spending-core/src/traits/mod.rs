pub mod inflation_index;
pub mod relevance_engine;

pub use inflation_index::{IInflationIndex, InflationAdjustment};
pub use relevance_engine::IRelevanceEngine;
