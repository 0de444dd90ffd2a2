use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Moderation status of a story.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    #[default]
    Pending,
    Published,
    Refused,
}

impl StoryStatus {
    /// Only published stories are visible through the public listing.
    pub fn is_public(self) -> bool {
        matches!(self, Self::Published)
    }
}
