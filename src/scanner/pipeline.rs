//! ElementScanner - one call extracts every enabled category
//!
//! The URL pass may rewrite the text, so it always runs first and every other
//! category is extracted from the rewritten text. All ranges in a
//! [`ScanResult`] therefore point into `ScanResult::text`.
//!
//! # Usage (JavaScript)
//! ```javascript
//! import init, { ElementScanner } from 'activetext';
//!
//! await init();
//! const scanner = new ElementScanner();
//! scanner.addCustomPattern("\\bkitt\\b");
//! scanner.setHashtagFilter(tag => tag !== 'spam');
//! const result = scanner.scan(documentText);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

use super::buffer::TextBuffer;
use super::builder::{extract, extract_urls, UrlExtraction};
use super::category::{Category, CustomPattern};
use super::config::ScannerConfig;
use super::element::ElementTuple;
use super::filter::FilterPredicate;
use crate::error::ScanError;

// ==================== TYPE DEFINITIONS ====================

/// Timing breakdown in microseconds
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScanTimings {
    pub url_us: u64,
    pub symbol_us: u64,
    pub custom_us: u64,
    pub total_us: u64,
}

/// Statistics for one scan
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScanStats {
    pub timings: ScanTimings,
    /// Length of the output text in bytes
    pub text_length: usize,
    pub urls_found: usize,
    pub urls_truncated: usize,
    pub mentions_found: usize,
    pub hashtags_found: usize,
    pub custom_found: usize,
}

/// Output of a full scan
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScanResult {
    /// Text after URL truncation. Equal to the input when nothing was shortened.
    pub text: String,
    /// Url elements first, then mentions, hashtags and custom patterns
    pub elements: Vec<ElementTuple>,
    pub stats: ScanStats,
}

impl ScanResult {
    /// Elements of one category, in text order
    pub fn elements_of<'a>(&'a self, category: &Category) -> impl Iterator<Item = &'a ElementTuple> + 'a {
        let category = category.clone();
        self.elements.iter().filter(move |t| t.category == category)
    }
}

// ==================== SCANNER ====================

/// Element scanner: configuration plus per-category filters
#[wasm_bindgen]
pub struct ElementScanner {
    config: ScannerConfig,
    filters: HashMap<Category, FilterPredicate>,
}

impl Default for ElementScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ElementScanner {
    /// Scanner with mentions, hashtags and URLs enabled, no truncation
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(ScannerConfig::default())
    }

    /// Create from a JS config object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn js_with_config(config_js: JsValue) -> Result<ElementScanner, JsValue> {
        let config: ScannerConfig = serde_wasm_bindgen::from_value(config_js)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(Self::with_config(config))
    }

    /// Register a custom regex pattern (JS binding)
    #[wasm_bindgen(js_name = addCustomPattern)]
    pub fn js_add_custom_pattern(&mut self, pattern: &str) -> Result<(), JsValue> {
        self.add_custom_pattern(pattern)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        web_sys::console::log_1(&format!(
            "[ElementScanner] Custom pattern added ({} total)",
            self.config.custom_patterns.len()
        ).into());
        Ok(())
    }

    #[wasm_bindgen(js_name = setUrlMaxLength)]
    pub fn set_url_max_length(&mut self, max_length: Option<usize>) {
        self.config.url_max_length = max_length;
    }

    #[wasm_bindgen(js_name = setMentionFilter)]
    pub fn js_set_mention_filter(&mut self, predicate: js_sys::Function) {
        self.set_filter(Category::Mention, js_filter(predicate));
    }

    #[wasm_bindgen(js_name = setHashtagFilter)]
    pub fn js_set_hashtag_filter(&mut self, predicate: js_sys::Function) {
        self.set_filter(Category::Hashtag, js_filter(predicate));
    }

    #[wasm_bindgen(js_name = setCustomFilter)]
    pub fn js_set_custom_filter(&mut self, pattern: &str, predicate: js_sys::Function) -> Result<(), JsValue> {
        let category = Category::custom(pattern)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.set_filter(category, js_filter(predicate));
        Ok(())
    }

    /// Scan text for all enabled categories (JS binding)
    #[wasm_bindgen(js_name = scan)]
    pub fn js_scan(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.scan(text);
        serde_wasm_bindgen::to_value(&result).map_err(|e| {
            web_sys::console::error_1(&format!("[ElementScanner] Serialization failed: {:?}", e).into());
            JsValue::from_str(&format!("Serialization error: {}", e))
        })
    }

    /// Extract one category from unmodified text (JS binding)
    ///
    /// `category` is `{ type: "mention" | "hashtag" | "url" }` or
    /// `{ type: "custom", pattern: "..." }`.
    #[wasm_bindgen(js_name = extract)]
    pub fn js_extract(&self, category: JsValue, text: &str) -> Result<JsValue, JsValue> {
        let category: Category = serde_wasm_bindgen::from_value(category)
            .map_err(|e| JsValue::from_str(&format!("Invalid category: {}", e)))?;
        let elements = self.extract_category(&category, text);
        serde_wasm_bindgen::to_value(&elements)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Current configuration as a JS object
    #[wasm_bindgen(js_name = getConfig)]
    pub fn js_config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.config).unwrap_or(JsValue::NULL)
    }
}

impl ElementScanner {
    pub fn with_config(config: ScannerConfig) -> Self {
        Self {
            config,
            filters: HashMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ScanError> {
        ScannerConfig::from_json(json).map(Self::with_config)
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Compile and enable a custom pattern; returns its category
    pub fn add_custom_pattern(&mut self, pattern: &str) -> Result<Category, ScanError> {
        let custom = CustomPattern::new(pattern)?;
        self.config.push_custom(custom.clone());
        Ok(Category::Custom(custom))
    }

    /// Install a filter for one category. `scan` ignores a Url filter because
    /// its truncating URL pass does not filter; `extract_category` applies it.
    pub fn set_filter(&mut self, category: Category, filter: FilterPredicate) {
        self.filters.insert(category, filter);
    }

    pub fn clear_filter(&mut self, category: &Category) {
        self.filters.remove(category);
    }

    fn filter_for(&self, category: &Category) -> FilterPredicate {
        self.filters.get(category).cloned().unwrap_or_default()
    }

    /// Extract a single category from `text` without rewriting it
    pub fn extract_category(&self, category: &Category, text: &str) -> Vec<ElementTuple> {
        extract(category, text, 0..text.len(), &self.filter_for(category))
    }

    /// Full scan: URL pass (may shorten the text), then every other enabled
    /// category over the resulting text
    pub fn scan(&self, text: &str) -> ScanResult {
        let overall_start = instant::Instant::now();
        let mut result = ScanResult::default();

        // Phase 1: URLs (rewrites the buffer when url_max_length is set)
        let url_start = instant::Instant::now();
        let text = if self.config.enable_urls {
            let buffer = TextBuffer::new(text);
            let range = buffer.full_range();
            let urls = extract_urls(buffer, range, self.config.url_max_length);
            result.stats.urls_truncated = urls.truncated_count();
            let UrlExtraction { buffer, elements } = urls;
            result.stats.urls_found = elements.len();
            result.elements.extend(elements);
            buffer.into_string()
        } else {
            text.to_string()
        };
        result.stats.timings.url_us = url_start.elapsed().as_micros() as u64;

        // Phase 2: everything else, against the final text
        for category in self.config.symbol_and_custom_categories() {
            let phase_start = instant::Instant::now();
            let found = self.extract_category(&category, &text);
            let elapsed = phase_start.elapsed().as_micros() as u64;

            match category {
                Category::Mention => {
                    result.stats.mentions_found = found.len();
                    result.stats.timings.symbol_us += elapsed;
                }
                Category::Hashtag => {
                    result.stats.hashtags_found = found.len();
                    result.stats.timings.symbol_us += elapsed;
                }
                _ => {
                    result.stats.custom_found += found.len();
                    result.stats.timings.custom_us += elapsed;
                }
            }
            result.elements.extend(found);
        }

        result.stats.text_length = text.len();
        result.text = text;
        result.stats.timings.total_us = overall_start.elapsed().as_micros() as u64;
        result
    }
}

/// Wrap a JS function as a filter. A throwing predicate accepts the word,
/// the same as having no filter.
fn js_filter(predicate: js_sys::Function) -> FilterPredicate {
    FilterPredicate::new(move |word| {
        predicate
            .call1(&JsValue::NULL, &JsValue::from_str(word))
            .map(|v| v.is_truthy())
            .unwrap_or(true)
    })
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::element::Element;

    #[test]
    fn test_default_scan() {
        let scanner = ElementScanner::new();
        let result = scanner.scan("Hello @world, check #swift and http://example.com");

        assert_eq!(result.stats.urls_found, 1);
        assert_eq!(result.stats.mentions_found, 1);
        assert_eq!(result.stats.hashtags_found, 1);
        assert_eq!(result.elements.len(), 3);
        assert_eq!(result.elements[0].category, Category::Url);
        assert_eq!(result.elements[1].category, Category::Mention);
        assert_eq!(result.elements[2].category, Category::Hashtag);
    }

    #[test]
    fn test_ranges_point_into_truncated_text() {
        let mut config = ScannerConfig::default();
        config.url_max_length = Some(10);
        let scanner = ElementScanner::with_config(config);

        let result = scanner.scan("see http://averyveryverylongurl.com with @frodo #ring");
        assert_eq!(result.text, "see http://ave... with @frodo #ring");
        assert_eq!(result.stats.urls_truncated, 1);

        for tuple in &result.elements {
            let slice = &result.text[tuple.range.clone()];
            match &tuple.element {
                Element::Url { trimmed, .. } => assert_eq!(slice, trimmed),
                Element::Mention(name) => assert_eq!(slice, format!("@{}", name)),
                Element::Hashtag(tag) => assert_eq!(slice, format!("#{}", tag)),
                Element::Custom(word) => assert_eq!(slice, word),
            }
        }
    }

    #[test]
    fn test_distinct_long_urls_interleaved() {
        let config = ScannerConfig {
            url_max_length: Some(10),
            ..ScannerConfig::default()
        };
        let scanner = ElementScanner::with_config(config);
        let a = "http://aaaaaaaaaaaaaaaaaaaa.com";
        let b = "http://bbbbbbbbbbbbbbbbbbbb.com";
        let result = scanner.scan(&format!("{} {} {} @sam", a, b, a));

        assert_eq!(result.text, "http://aaa... http://bbb... http://aaa... @sam");
        assert_eq!(result.stats.urls_found, 3);
        for tuple in &result.elements {
            assert!(
                result.text.get(tuple.range.clone()).is_some(),
                "{:?} out of bounds",
                tuple.range
            );
        }
        let sam = result.elements_of(&Category::Mention).next().unwrap();
        assert_eq!(&result.text[sam.range.clone()], "@sam");
    }

    #[test]
    fn test_disabled_categories() {
        let config = ScannerConfig {
            enable_mentions: false,
            enable_urls: false,
            ..ScannerConfig::default()
        };
        let scanner = ElementScanner::with_config(config);
        let result = scanner.scan("@frodo #ring http://example.com");
        assert_eq!(result.elements.len(), 1);
        assert_eq!(result.elements[0].category, Category::Hashtag);
    }

    #[test]
    fn test_filters_per_category() {
        let mut scanner = ElementScanner::new();
        scanner.set_filter(Category::Mention, FilterPredicate::deny(["bot"]));

        let result = scanner.scan("@bot @sam #bot");
        let mentions: Vec<_> = result.elements_of(&Category::Mention).collect();
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].element.text(), "sam");
        // The hashtag filter is independent
        assert_eq!(result.elements_of(&Category::Hashtag).count(), 1);

        scanner.clear_filter(&Category::Mention);
        assert_eq!(scanner.scan("@bot @sam").stats.mentions_found, 2);
    }

    #[test]
    fn test_url_filter_not_applied() {
        let mut scanner = ElementScanner::new();
        scanner.set_filter(Category::Url, FilterPredicate::new(|_| false));
        let result = scanner.scan("http://example.com");
        assert_eq!(result.stats.urls_found, 1);
        // The single-category path still honours it
        assert!(scanner.extract_category(&Category::Url, "http://example.com").is_empty());
    }

    #[test]
    fn test_custom_pattern() {
        let mut scanner = ElementScanner::new();
        let category = scanner.add_custom_pattern(r"\bare\b").unwrap();

        let result = scanner.scan("Elves are wise and dwarves ARE stout");
        let custom: Vec<_> = result.elements_of(&category).collect();
        assert_eq!(custom.len(), 2);
        assert_eq!(custom[1].element, Element::Custom("ARE".to_string()));
        assert_eq!(result.stats.custom_found, 2);
    }

    #[test]
    fn test_custom_filter_by_category_equality() {
        let mut scanner = ElementScanner::new();
        scanner.add_custom_pattern(r"\bare\b").unwrap();
        // A separately compiled pattern with the same source keys the same filter
        scanner.set_filter(
            Category::custom(r"\bare\b").unwrap(),
            FilterPredicate::new(|w| w == "are"),
        );
        let result = scanner.scan("are ARE");
        assert_eq!(result.stats.custom_found, 1);
    }

    #[test]
    fn test_add_invalid_custom_pattern() {
        let mut scanner = ElementScanner::new();
        assert!(scanner.add_custom_pattern("[").is_err());
        assert!(scanner.config().custom_patterns.is_empty());
    }

    #[test]
    fn test_from_json() {
        let scanner = ElementScanner::from_json(r#"{ "url_max_length": 12 }"#).unwrap();
        assert_eq!(scanner.config().url_max_length, Some(12));
        assert!(ElementScanner::from_json("nope").is_err());
    }

    #[test]
    fn test_extract_category_does_not_truncate() {
        let mut config = ScannerConfig::default();
        config.url_max_length = Some(5);
        let scanner = ElementScanner::with_config(config);
        let found = scanner.extract_category(&Category::Url, "http://example.com");
        assert_eq!(found.len(), 1);
        assert!(!found[0].element.is_truncated());
    }

    #[test]
    fn test_stats_text_length() {
        let scanner = ElementScanner::new();
        let result = scanner.scan("plain text");
        assert!(result.elements.is_empty());
        assert_eq!(result.stats.text_length, 10);
        assert_eq!(result.text, "plain text");
    }
}
