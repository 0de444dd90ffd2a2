//! Listing predicates. Each is independent of relevance computation and they
//! compose by conjunction.

use crate::batch::RankedStory;

#[derive(Debug, Clone, PartialEq)]
pub enum StoryFilter {
    /// Relevance score strictly above the threshold. Stories without a score never match.
    ScoreAbove(f64),
    /// Story language equals the tag.
    LangIs(String),
}

impl StoryFilter {
    pub fn matches(&self, story: &RankedStory) -> bool {
        match self {
            Self::ScoreAbove(threshold) => story.score().is_some_and(|s| s > *threshold),
            Self::LangIs(tag) => story.story.lang == *tag,
        }
    }
}

/// All filters must match. An empty set matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    filters: Vec<StoryFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: StoryFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn push(&mut self, filter: StoryFilter) {
        self.filters.push(filter);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn matches(&self, story: &RankedStory) -> bool {
        self.filters.iter().all(|f| f.matches(story))
    }

    pub fn apply(&self, stories: &mut Vec<RankedStory>) {
        if !self.is_empty() {
            stories.retain(|s| self.matches(s));
        }
    }
}
