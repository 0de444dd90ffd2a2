pub mod relevance_type;
pub mod result;
pub mod score;

pub use relevance_type::RelevanceType;
pub use result::RelevanceResult;
pub use score::RelevanceScore;
