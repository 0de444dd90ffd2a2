#![allow(dead_code)]

use spending_core::{NormalizedValue, Story, StoryStatus, StoryType};

/// Published story already normalized to `value_usd`.
pub fn published(value_usd: f64, story_type: StoryType, lang: &str) -> Story {
    let mut story = Story::new("story", value_usd, 2012, "USA", "USD", lang);
    story.story_type = story_type;
    story.status = StoryStatus::Published;
    story.normalized = Some(NormalizedValue {
        inputs: story.normalization_key(),
        current_value: value_usd,
        current_value_usd: value_usd,
        inflation_last_year: 2013,
    });
    story
}

pub fn discrete(value_usd: f64) -> Story {
    published(value_usd, StoryType::Discrete, "en_GB")
}

pub fn yearly(value_usd: f64) -> Story {
    published(value_usd, StoryType::OverOneYear, "en_GB")
}

/// Published story whose normalized value could not be trusted.
pub fn with_usd(mut story: Story, value_usd: f64) -> Story {
    if let Some(n) = story.normalized.as_mut() {
        n.current_value_usd = value_usd;
    }
    story
}
