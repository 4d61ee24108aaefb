//! Pattern matcher - ordered, non-overlapping matches inside a search range

use regex::Regex;
use std::ops::Range;

/// Named capture group that narrows a match to the element itself
pub const ELEMENT_GROUP: &str = "element";

/// A located occurrence of a category's pattern
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Byte range into the searched text. Narrowed to the `element` group
    /// when the pattern has one.
    pub range: Range<usize>,
    /// Length in chars of the whole regex match, delimiter included. Length
    /// thresholds apply to this, not to `range`.
    pub len: usize,
}

impl Match {
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range.clone()]
    }
}

/// Find all matches of `regex` within `range` of `text`.
///
/// The range is searched as its own haystack, so `^` anchors at
/// `range.start`. Returned ranges are absolute offsets into `text`, left to
/// right and non-overlapping. A range that is out of bounds or splits a char
/// yields no matches.
pub fn find_matches(regex: &Regex, text: &str, range: Range<usize>) -> Vec<Match> {
    let Some(haystack) = text.get(range.clone()) else {
        return Vec::new();
    };
    let offset = range.start;

    regex
        .captures_iter(haystack)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let element = caps.name(ELEMENT_GROUP).unwrap_or(whole);
            Some(Match {
                range: offset + element.start()..offset + element.end(),
                len: whole.as_str().chars().count(),
            })
        })
        .collect()
}
