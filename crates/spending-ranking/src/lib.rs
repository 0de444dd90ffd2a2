//! # spending-ranking
//!
//! Ranking orchestrator: evaluates the relevance of every public story in a
//! batch against one comparison amount, drops the stories that fail, and
//! filters and orders the rest.

pub mod batch;
pub mod filters;
pub mod languages;
pub mod order;
pub mod pipeline;
pub mod query;

pub use batch::{RankedBatch, RankedStory, SkippedStory};
pub use filters::{FilterSet, StoryFilter};
pub use languages::{FilterListing, Languages};
pub use pipeline::RankingPipeline;
pub use query::ListingQuery;
