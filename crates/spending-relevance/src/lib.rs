//! # spending-relevance
//!
//! Relevance of a story value against a comparison amount:
//! classification into a [`RelevanceType`](spending_core::RelevanceType),
//! the type-specific relevance value, and a 0–10 score.

pub mod accuracy;
pub mod calculator;
pub mod classifier;
pub mod engine;
pub mod landmarks;
pub mod validation;

pub use accuracy::AccuracyAudit;
pub use calculator::{Computation, RelevanceCalculator, ScoreDecay};
pub use classifier::{Classification, RelevanceClassifier};
pub use engine::RelevanceEngine;
