use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;

/// Output ordering of a ranked listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep the underlying listing order (creation time).
    #[default]
    Listing,
    /// Descending relevance score; equal scores keep listing order.
    ScoreDesc,
}

/// Ranking orchestrator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Batch size from which stories are evaluated on the rayon pool.
    pub parallel_threshold: usize,
    /// Ordering used when a query does not ask for one.
    pub default_sort: SortOrder,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
            default_sort: SortOrder::default(),
        }
    }
}
