//! Scanner configuration
//!
//! Every field has a serde default, so `{}` is a valid configuration that
//! enables mentions, hashtags and URLs with no truncation.

use serde::{Deserialize, Serialize};

use super::category::{Category, CustomPattern};
use crate::error::ScanError;

/// Configuration for the ElementScanner
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScannerConfig {
    #[serde(default = "default_true")]
    pub enable_mentions: bool,
    #[serde(default = "default_true")]
    pub enable_hashtags: bool,
    #[serde(default = "default_true")]
    pub enable_urls: bool,
    /// Extra regex patterns, each its own category
    #[serde(default)]
    pub custom_patterns: Vec<CustomPattern>,
    /// URLs longer than this many characters are shortened in the output
    /// text (None = never shorten)
    #[serde(default)]
    pub url_max_length: Option<usize>,
}

fn default_true() -> bool { true }

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            enable_mentions: true,
            enable_hashtags: true,
            enable_urls: true,
            custom_patterns: Vec::new(),
            url_max_length: None,
        }
    }
}

impl ScannerConfig {
    /// Parse from JSON. Custom patterns are compiled while parsing.
    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ScanError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Enabled categories other than Url, in extraction order
    pub fn symbol_and_custom_categories(&self) -> Vec<Category> {
        let mut categories = Vec::with_capacity(2 + self.custom_patterns.len());
        if self.enable_mentions {
            categories.push(Category::Mention);
        }
        if self.enable_hashtags {
            categories.push(Category::Hashtag);
        }
        categories.extend(self.custom_patterns.iter().cloned().map(Category::Custom));
        categories
    }

    /// Add a custom pattern unless an identical one is already configured
    pub fn push_custom(&mut self, pattern: CustomPattern) -> bool {
        if self.custom_patterns.contains(&pattern) {
            return false;
        }
        self.custom_patterns.push(pattern);
        true
    }
}
