//! Element types - what an extractor emits for each accepted match

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::category::Category;

/// Structured payload of an extracted span.
///
/// Mentions and hashtags carry the word without its sigil. Urls carry the
/// original text plus the text actually displayed, which differs only when
/// the URL was truncated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Element {
    Mention(String),
    Hashtag(String),
    Url { original: String, trimmed: String },
    Custom(String),
}

impl Element {
    /// Element factory. Total: every category maps to exactly one variant.
    pub fn create(category: &Category, text: &str) -> Self {
        match category {
            Category::Mention => Element::Mention(text.to_string()),
            Category::Hashtag => Element::Hashtag(text.to_string()),
            Category::Url => Element::Url {
                original: text.to_string(),
                trimmed: text.to_string(),
            },
            Category::Custom(_) => Element::Custom(text.to_string()),
        }
    }

    /// Text as it appears in the (possibly rewritten) buffer
    pub fn text(&self) -> &str {
        match self {
            Element::Mention(text) | Element::Hashtag(text) | Element::Custom(text) => text,
            Element::Url { trimmed, .. } => trimmed,
        }
    }

    /// True for a URL whose displayed text was shortened
    pub fn is_truncated(&self) -> bool {
        matches!(self, Element::Url { original, trimmed } if original != trimmed)
    }
}

/// The unit of output: where, what, and which category.
///
/// `range` is a byte range into the buffer as it was when this tuple was
/// produced. After URL truncation that is the rewritten text, not the input.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ElementTuple {
    pub range: Range<usize>,
    pub element: Element,
    pub category: Category,
}

impl ElementTuple {
    pub fn new(range: Range<usize>, element: Element, category: Category) -> Self {
        Self {
            range,
            element,
            category,
        }
    }
}
