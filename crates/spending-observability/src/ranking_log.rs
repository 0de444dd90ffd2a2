//! Ranking call logging: target amount, latency, ranked/skipped counts.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A single ranking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingLogEntry {
    pub target_amount: f64,
    pub latency: Duration,
    pub ranked: usize,
    pub skipped: usize,
    pub highly_relevant: usize,
    pub timestamp_epoch_ms: i64,
}

impl RankingLogEntry {
    /// Create a new entry with the timestamp set to now.
    pub fn new(
        target_amount: f64,
        latency: Duration,
        ranked: usize,
        skipped: usize,
        highly_relevant: usize,
    ) -> Self {
        Self {
            target_amount,
            latency,
            ranked,
            skipped,
            highly_relevant,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Append-only ranking log, bounded to `max_entries` (oldest dropped first).
#[derive(Debug, Clone)]
pub struct RankingLog {
    entries: Vec<RankingLogEntry>,
    max_entries: usize,
}

impl RankingLog {
    pub fn new() -> Self {
        Self::with_capacity(10_000)
    }

    /// Create with a custom capacity.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Record a ranking call.
    pub fn record(&mut self, entry: RankingLogEntry) {
        tracing::debug!(
            event = "ranking_logged",
            target_amount = entry.target_amount,
            latency_us = entry.latency.as_micros() as u64,
            ranked = entry.ranked,
            skipped = entry.skipped,
            "ranking logged"
        );

        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.drain(..self.entries.len() - self.max_entries);
        }
    }

    pub fn entries(&self) -> &[RankingLogEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Average latency across all logged calls.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Share of evaluated stories that were skipped, over all calls.
    pub fn skip_rate(&self) -> f64 {
        let (ranked, skipped) = self
            .entries
            .iter()
            .fold((0usize, 0usize), |(r, s), e| (r + e.ranked, s + e.skipped));
        let total = ranked + skipped;
        if total == 0 {
            0.0
        } else {
            skipped as f64 / total as f64
        }
    }
}

impl Default for RankingLog {
    fn default() -> Self {
        Self::new()
    }
}
