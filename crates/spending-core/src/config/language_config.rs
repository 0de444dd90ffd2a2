use serde::{Deserialize, Serialize};

use super::defaults;

/// A supported story language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

/// Supported story languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Language assigned to stories that do not declare one.
    pub default: String,
    pub supported: Vec<LanguageEntry>,
}

impl LanguageConfig {
    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|l| l.code == code)
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: defaults::DEFAULT_LANGUAGE.to_string(),
            supported: defaults::DEFAULT_SUPPORTED_LANGUAGES
                .iter()
                .map(|(code, name)| LanguageEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}
