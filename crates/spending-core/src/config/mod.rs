//! Configuration for the relevance engine.
//! TOML-based, resolved as: environment (`SPENDING_*`) > file > compiled defaults.

pub mod defaults;
pub mod language_config;
pub mod observability_config;
pub mod ranking_config;
pub mod relevance_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use language_config::{LanguageConfig, LanguageEntry};
pub use observability_config::ObservabilityConfig;
pub use ranking_config::{RankingConfig, SortOrder};
pub use relevance_config::RelevanceConfig;

use crate::constants::MAX_RELEVANCE_SCORE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpendingConfig {
    pub relevance: RelevanceConfig,
    pub ranking: RankingConfig,
    pub languages: LanguageConfig,
    pub observability: ObservabilityConfig,
}

impl SpendingConfig {
    /// Load configuration from a TOML file, then apply `SPENDING_*` environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: SpendingConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. No environment overrides.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SpendingConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    /// Pattern: `SPENDING_RELEVANCE_ACCURACY_TOLERANCE`, `SPENDING_LOG_LEVEL`, etc.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SPENDING_RELEVANCE_ACCURACY_TOLERANCE")
            .and_then(|s| s.parse::<f64>().ok())
        {
            self.relevance.accuracy_tolerance = v;
        }
        if let Some(v) = lookup("SPENDING_RELEVANCE_HIGH_SCORE").and_then(|s| s.parse::<f64>().ok())
        {
            self.relevance.high_relevance_score = v;
        }
        if let Some(v) = lookup("SPENDING_RANKING_PARALLEL_THRESHOLD")
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.ranking.parallel_threshold = v;
        }
        if let Some(v) = lookup("SPENDING_DEFAULT_LANGUAGE") {
            self.languages.default = v;
        }
        if let Some(v) = lookup("SPENDING_LOG_LEVEL") {
            self.observability.log_level = v;
        }
        if let Some(v) = lookup("SPENDING_LOG_JSON").and_then(|s| s.parse::<bool>().ok()) {
            self.observability.json = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.relevance.accuracy_tolerance;
        if !(tolerance > 0.0 && tolerance < 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "relevance.accuracy_tolerance".to_string(),
                message: "must be strictly between 0.0 and 1.0".to_string(),
            });
        }
        let score = self.relevance.high_relevance_score;
        if !(score > 0.0 && score < MAX_RELEVANCE_SCORE) {
            return Err(ConfigError::ValidationFailed {
                field: "relevance.high_relevance_score".to_string(),
                message: format!("must be strictly between 0.0 and {MAX_RELEVANCE_SCORE}"),
            });
        }
        if self.languages.supported.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "languages.supported".to_string(),
                message: "at least one language is required".to_string(),
            });
        }
        if !self.languages.is_supported(&self.languages.default) {
            return Err(ConfigError::ValidationFailed {
                field: "languages.default".to_string(),
                message: format!("{} is not a supported language", self.languages.default),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
