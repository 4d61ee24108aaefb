//! Element builders - matches to element tuples
//!
//! Three strategies, one per kind of payload:
//! - Generic: the whole (whitespace-trimmed) match is the payload (Url, Custom)
//! - Sigil-stripping: the match starts with `@`/`#`, which is highlighted but
//!   not part of the payload (Mention, Hashtag)
//! - URL truncation: like generic, but shortens over-length URLs in the
//!   buffer itself and reports ranges into the rewritten text
//!
//! Negative outcomes are silent: short matches and filtered words are
//! dropped, never reported as errors.

use std::ops::Range;

use super::buffer::TextBuffer;
use super::category::Category;
use super::element::{Element, ElementTuple};
use super::filter::FilterPredicate;
use super::pattern::find_matches;
use super::truncate::{grapheme_len, Ellipsis, Truncator};

/// Sigils stripped from mention/hashtag payloads
const SIGILS: [char; 2] = ['@', '#'];

// ==================== DISPATCH ====================

/// Extract all elements of `category` from `range` of `text`.
///
/// Urls go through the non-truncating generic path here. To shorten long
/// URLs, call [`extract_urls`] on a [`TextBuffer`] instead.
pub fn extract(
    category: &Category,
    text: &str,
    range: Range<usize>,
    filter: &FilterPredicate,
) -> Vec<ElementTuple> {
    match category {
        Category::Mention | Category::Hashtag => {
            extract_stripping_sigil(text, category, range, filter)
        }
        Category::Url | Category::Custom(_) => {
            extract_generic(text, category, range, category.min_length(), filter)
        }
    }
}

// ==================== GENERIC ====================

/// Every match longer than `min_length` chars becomes an element built from
/// its trimmed text.
///
/// The emitted range is the raw match range, including any whitespace that
/// was trimmed off the payload.
pub fn extract_generic(
    text: &str,
    category: &Category,
    range: Range<usize>,
    min_length: usize,
    filter: &FilterPredicate,
) -> Vec<ElementTuple> {
    find_matches(category.pattern(), text, range)
        .into_iter()
        .filter(|m| m.len > min_length)
        .filter_map(|m| {
            let word = m.as_str(text).trim();
            filter.accepts(word).then(|| {
                ElementTuple::new(m.range, Element::create(category, word), category.clone())
            })
        })
        .collect()
}

// ==================== SIGIL-STRIPPING ====================

/// Mentions and hashtags: drop the leading sigil from the payload but keep
/// it inside the emitted range.
///
/// A match must be longer than 2 chars counting its delimiter, so a bare
/// sigil (`" @"`) is skipped, as is a one-letter word at the very start of
/// the range (`"#a"`), while `" #a"` is kept.
pub fn extract_stripping_sigil(
    text: &str,
    category: &Category,
    range: Range<usize>,
    filter: &FilterPredicate,
) -> Vec<ElementTuple> {
    find_matches(category.pattern(), text, range)
        .into_iter()
        .filter(|m| m.len > 2)
        .filter_map(|m| {
            let matched = m.as_str(text);
            let mut chars = matched.chars();
            chars.next();
            let inner = chars.as_str();
            // A pattern that captures its delimiter leaves the sigil in place
            let word = inner.strip_prefix(&SIGILS[..]).unwrap_or(inner);

            filter.accepts(word).then(|| {
                ElementTuple::new(m.range, Element::create(category, word), category.clone())
            })
        })
        .collect()
}

// ==================== URL TRUNCATION ====================

/// Result of the URL pass: the (possibly rewritten) buffer and the URL
/// elements, whose ranges point into that buffer.
#[derive(Debug, Clone)]
pub struct UrlExtraction {
    pub buffer: TextBuffer,
    pub elements: Vec<ElementTuple>,
}

impl UrlExtraction {
    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// Number of URL occurrences that were shortened
    pub fn truncated_count(&self) -> usize {
        self.elements.iter().filter(|t| t.element.is_truncated()).count()
    }
}

/// Extract URLs, shortening those longer than `max_length` graphemes with
/// the default [`Ellipsis`] truncator.
pub fn extract_urls(
    buffer: TextBuffer,
    range: Range<usize>,
    max_length: Option<usize>,
) -> UrlExtraction {
    extract_urls_with(buffer, range, max_length, &Ellipsis)
}

/// Extract URLs with a caller-supplied truncator.
///
/// Matches are found once, against the text as it is on entry. For an
/// over-length URL, every occurrence of the same text anywhere in the buffer
/// is replaced by the truncated form and reported, not only the occurrence
/// at the match. Later matches of an already-replaced URL therefore emit
/// nothing. No filter predicate is applied on this path.
///
/// Every returned range addresses the buffer as it is on return, including
/// ranges emitted before later replacements shifted the text.
pub fn extract_urls_with(
    mut buffer: TextBuffer,
    range: Range<usize>,
    max_length: Option<usize>,
    truncator: &dyn Truncator,
) -> UrlExtraction {
    let category = Category::Url;
    let original = buffer.as_str().to_string();
    let base = buffer.edits().len();
    // Each tuple with the edit count its range is relative to
    let mut emitted: Vec<(ElementTuple, usize)> = Vec::new();

    for m in find_matches(category.pattern(), &original, range) {
        if m.len <= category.min_length() {
            continue;
        }
        let word = m.as_str(&original).trim();

        let max = match max_length {
            Some(max) if grapheme_len(word) > max => max,
            _ => {
                let range = buffer.map_range_since(m.range, base);
                emitted.push((
                    ElementTuple::new(range, Element::create(&category, word), category.clone()),
                    buffer.edits().len(),
                ));
                continue;
            }
        };

        let trimmed = truncator.truncate(word, max);
        let mut cursor = 0;
        while let Some(found) = buffer.find_from(word, cursor) {
            let Some(inserted) = buffer.replace(found, &trimmed) else {
                break;
            };
            cursor = inserted.end;
            emitted.push((
                ElementTuple::new(
                    inserted,
                    Element::Url {
                        original: word.to_string(),
                        trimmed: trimmed.clone(),
                    },
                    category.clone(),
                ),
                buffer.edits().len(),
            ));
        }
    }

    let elements = emitted
        .into_iter()
        .map(|(mut tuple, since)| {
            tuple.range = buffer.map_range_since(tuple.range, since);
            tuple
        })
        .collect();

    UrlExtraction { buffer, elements }
}

// ==================== TESTS ====================
