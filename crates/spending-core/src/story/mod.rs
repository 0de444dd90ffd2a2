pub mod base;
pub mod normalized;
pub mod status;
pub mod story_type;

pub use base::Story;
pub use normalized::{NormalizationKey, NormalizedValue};
pub use status::StoryStatus;
pub use story_type::StoryType;
