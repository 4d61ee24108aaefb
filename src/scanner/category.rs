//! Category - what kind of span a match represents
//!
//! Each category owns a compiled pattern and a minimum match length:
//! - Mention: `@username` (min length 2)
//! - Hashtag: `#tag` (min length 2)
//! - Url: `http(s)://...`, `www....`, `pic....` (min length 2)
//! - Custom: any user-supplied regex (min length 1)
//!
//! Built-in patterns are compiled once and shared. All patterns are case
//! insensitive.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::error::ScanError;

// ==================== PATTERNS ====================

// Rust regex has no look-around, so each built-in pattern matches the
// delimiter in front of the element and captures the element itself in the
// `element` group. The matcher reports that group's range.

/// `@name` at the start of text, after whitespace, or after a period
const MENTION_PATTERN: &str = r"(?:^|\s|\.)(?P<element>@[\p{L}0-9_]*)";

/// `#tag` at the start of text or after whitespace
const HASHTAG_PATTERN: &str = r"(?:^|\s)(?P<element>#[\p{L}0-9_]*)";

/// Scheme or `www.`/`pic.` prefix, a run of URL characters, ending on a
/// word character, `/` or `#`, optionally followed by `()`
const URL_PATTERN: &str = concat!(
    r"(?:^|[\s.:;?\-\]<\(])",
    r"(?P<element>(?:https?://|www\.|pic\.)[-\w;/?:@&=+$|.!~*'()\[\]%#,☺]+[\w/#](?:\(\))?)",
);

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

fn mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(MENTION_PATTERN).expect("mention pattern compiles"))
}

fn hashtag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(HASHTAG_PATTERN).expect("hashtag pattern compiles"))
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(URL_PATTERN).expect("url pattern compiles"))
}

// ==================== CUSTOM PATTERN ====================

/// A user-defined pattern, compiled once at construction.
///
/// Two custom patterns are the same category when their sources are equal.
/// If the regex defines a named group `element`, that group is what gets
/// extracted; otherwise the whole match is.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomPattern {
    source: String,
    regex: Regex,
}

impl CustomPattern {
    pub fn new(pattern: &str) -> Result<Self, ScanError> {
        let regex = compile(pattern).map_err(|source| ScanError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern source as given by the caller
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for CustomPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for CustomPattern {}

impl Hash for CustomPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl fmt::Debug for CustomPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomPattern").field(&self.source).finish()
    }
}

impl TryFrom<String> for CustomPattern {
    type Error = ScanError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::new(&pattern)
    }
}

impl From<CustomPattern> for String {
    fn from(pattern: CustomPattern) -> Self {
        pattern.source
    }
}

// ==================== CATEGORY ====================

/// Semantic class of a detectable span
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(tag = "type", content = "pattern", rename_all = "snake_case")]
pub enum Category {
    Mention,
    Hashtag,
    Url,
    Custom(CustomPattern),
}

impl Category {
    /// Build a custom category from a regex source
    pub fn custom(pattern: &str) -> Result<Self, ScanError> {
        CustomPattern::new(pattern).map(Category::Custom)
    }

    /// Compiled pattern for this category
    pub fn pattern(&self) -> &Regex {
        match self {
            Category::Mention => mention_re(),
            Category::Hashtag => hashtag_re(),
            Category::Url => url_re(),
            Category::Custom(custom) => custom.regex(),
        }
    }

    /// A match must be strictly longer than this (in chars, counting the
    /// delimiter matched outside the `element` group) to be extracted
    pub fn min_length(&self) -> usize {
        match self {
            Category::Mention | Category::Hashtag | Category::Url => 2,
            Category::Custom(_) => 1,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Mention => "mention",
            Category::Hashtag => "hashtag",
            Category::Url => "url",
            Category::Custom(custom) => custom.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Custom(custom) => write!(f, "custom({})", custom.as_str()),
            other => f.write_str(other.as_str()),
        }
    }
}

// ==================== TESTS ====================
