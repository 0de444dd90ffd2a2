/// Per-computation relevance errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RelevanceError {
    /// Bad caller-supplied input: non-positive or non-finite target, non-positive story value.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A non-finite value was produced or consumed during computation.
    #[error("computation error: {reason}")]
    ComputationError { reason: String },
}

impl RelevanceError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn computation(reason: impl Into<String>) -> Self {
        Self::ComputationError {
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
