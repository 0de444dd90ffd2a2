use spending_core::config::SortOrder;

use crate::batch::RankedStory;

/// Order `stories` in place. Sorting is stable: equal scores keep listing order,
/// and unscored stories sink below scored ones.
pub fn sort(stories: &mut [RankedStory], order: SortOrder) {
    match order {
        SortOrder::Listing => {}
        SortOrder::ScoreDesc => stories.sort_by(|a, b| {
            let a = a.score().unwrap_or(f64::NEG_INFINITY);
            let b = b.score().unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        }),
    }
}
