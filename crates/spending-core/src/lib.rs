//! # spending-core
//!
//! Foundation crate for the Spending Stories relevance engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod currency;
pub mod errors;
pub mod relevance;
pub mod story;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SpendingConfig;
pub use currency::Currency;
pub use errors::{RelevanceError, SpendingError, SpendingResult};
pub use relevance::{RelevanceResult, RelevanceScore, RelevanceType};
pub use story::{NormalizationKey, NormalizedValue, Story, StoryStatus, StoryType};
