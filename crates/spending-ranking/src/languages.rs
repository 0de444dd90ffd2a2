use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use spending_core::config::{LanguageConfig, LanguageEntry};
use tracing::warn;

static LANGUAGE_TAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(_[A-Z]{2})?$").ok());

/// Values a listing can currently be filtered by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterListing {
    pub lang: Vec<String>,
}

/// Supported story languages.
#[derive(Debug, Clone)]
pub struct Languages {
    default: String,
    entries: Vec<LanguageEntry>,
}

impl Languages {
    /// Build the catalogue from config. Malformed tags are dropped with a warning.
    pub fn from_config(config: &LanguageConfig) -> Self {
        let entries = config
            .supported
            .iter()
            .filter(|entry| {
                let ok = Self::is_well_formed(&entry.code);
                if !ok {
                    warn!(code = %entry.code, "ignoring malformed language tag");
                }
                ok
            })
            .cloned()
            .collect();
        Self {
            default: config.default.clone(),
            entries,
        }
    }

    /// `xx` or `xx_YY`.
    pub fn is_well_formed(tag: &str) -> bool {
        LANGUAGE_TAG.as_ref().is_some_and(|re| re.is_match(tag))
    }

    pub fn is_supported(&self, tag: &str) -> bool {
        self.entries.iter().any(|e| e.code == tag)
    }

    pub fn default_language(&self) -> &str {
        &self.default
    }

    pub fn list(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn name(&self, tag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == tag)
            .map(|e| e.name.as_str())
    }

    pub fn filter_listing(&self) -> FilterListing {
        FilterListing {
            lang: self.entries.iter().map(|e| e.code.clone()).collect(),
        }
    }
}

impl Default for Languages {
    fn default() -> Self {
        Self::from_config(&LanguageConfig::default())
    }
}
