//! # spending-observability
//!
//! Tracing subscriber setup, span macros and structured events for the
//! normalization and ranking paths, plus an in-memory ranking call log.

pub mod ranking_log;
pub mod tracing_setup;

pub use ranking_log::{RankingLog, RankingLogEntry};
pub use tracing_setup::init_tracing;
