use spending_core::config::SortOrder;

/// Query surface of the public story listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    /// Comparison amount. `None` lists stories without relevance fields.
    pub relevance_for: Option<f64>,
    /// Keep stories scoring strictly above this. Ignored without `relevance_for`.
    pub min_score: Option<f64>,
    pub lang: Option<String>,
    /// Falls back to the configured default order.
    pub sort: Option<SortOrder>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relevance_for(mut self, amount: f64) -> Self {
        self.relevance_for = Some(amount);
        self
    }

    pub fn min_score(mut self, threshold: f64) -> Self {
        self.min_score = Some(threshold);
        self
    }

    pub fn lang(mut self, tag: impl Into<String>) -> Self {
        self.lang = Some(tag.into());
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }
}
