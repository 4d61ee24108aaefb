//! TextBuffer - mutable text that remembers its edits
//!
//! Replacing a span returns the byte range of the inserted text directly, so
//! callers never have to search for what they just wrote. Every replacement
//! is logged; [`TextBuffer::map_range`] projects a range taken from the
//! text before any edit into the current text.

use std::ops::Range;

/// One applied replacement, in the coordinates of the text it was applied to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub old_len: usize,
    pub new_len: usize,
}

impl Edit {
    fn old_end(&self) -> usize {
        self.start + self.old_len
    }

    /// Map an offset from before this edit to after it. Offsets strictly
    /// inside the replaced span snap to its start (`right == false`) or to
    /// the end of the inserted text (`right == true`).
    fn map_offset(&self, offset: usize, right: bool) -> usize {
        if offset <= self.start {
            offset
        } else if offset >= self.old_end() {
            offset - self.old_len + self.new_len
        } else if right {
            self.start + self.new_len
        } else {
            self.start
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    edits: Vec<Edit>,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            edits: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whole-buffer range, for extracting over everything
    pub fn full_range(&self) -> Range<usize> {
        0..self.text.len()
    }

    /// First occurrence of `needle`
    pub fn find(&self, needle: &str) -> Option<Range<usize>> {
        self.find_from(needle, 0)
    }

    /// First occurrence of `needle` starting at byte `from`
    pub fn find_from(&self, needle: &str, from: usize) -> Option<Range<usize>> {
        if needle.is_empty() {
            return None;
        }
        let rest = self.text.get(from..)?;
        rest.find(needle)
            .map(|pos| from + pos..from + pos + needle.len())
    }

    /// Replace `range` with `with` and return the range now covered by `with`.
    ///
    /// Returns `None` (and leaves the buffer untouched) if `range` is out of
    /// bounds or not on char boundaries.
    pub fn replace(&mut self, range: Range<usize>, with: &str) -> Option<Range<usize>> {
        self.text.get(range.clone())?;

        self.text.replace_range(range.clone(), with);
        self.edits.push(Edit {
            start: range.start,
            old_len: range.len(),
            new_len: with.len(),
        });
        Some(range.start..range.start + with.len())
    }

    /// Project a range of the text as it was before any edit into the
    /// current text
    pub fn map_range(&self, original: Range<usize>) -> Range<usize> {
        self.map_range_since(original, 0)
    }

    /// Project a range taken after the first `since` edits into the current
    /// text
    pub fn map_range_since(&self, range: Range<usize>, since: usize) -> Range<usize> {
        self.edits
            .iter()
            .skip(since)
            .fold(range, |r, edit| {
                edit.map_offset(r.start, false)..edit.map_offset(r.end, true)
            })
    }

    /// Replacements applied so far, oldest first
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for TextBuffer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_occurrence() {
        let buffer = TextBuffer::new("abc abc");
        assert_eq!(buffer.find("abc"), Some(0..3));
        assert_eq!(buffer.find_from("abc", 1), Some(4..7));
        assert_eq!(buffer.find("xyz"), None);
    }

    #[test]
    fn test_find_empty_needle() {
        let buffer = TextBuffer::new("abc");
        assert_eq!(buffer.find(""), None);
    }

    #[test]
    fn test_find_from_past_end() {
        let buffer = TextBuffer::new("abc");
        assert_eq!(buffer.find_from("a", 10), None);
    }

    #[test]
    fn test_replace_returns_inserted_range() {
        let mut buffer = TextBuffer::new("see http://example.com now");
        let inserted = buffer.replace(4..22, "http://ex...").unwrap();
        assert_eq!(buffer.as_str(), "see http://ex... now");
        assert_eq!(&buffer.as_str()[inserted], "http://ex...");
    }

    #[test]
    fn test_replace_invalid_range() {
        let mut buffer = TextBuffer::new("héllo");
        assert_eq!(buffer.replace(2..3, "x"), None);
        assert_eq!(buffer.replace(0..99, "x"), None);
        assert_eq!(buffer.as_str(), "héllo");
        assert!(buffer.edits().is_empty());
    }

    #[test]
    fn test_map_range_after_shrinking_edit() {
        let mut buffer = TextBuffer::new("aaaaaaaaaa tail");
        buffer.replace(0..10, "a..").unwrap();
        assert_eq!(buffer.map_range(11..15), 4..8);
        assert_eq!(&buffer.as_str()[4..8], "tail");
    }

    #[test]
    fn test_map_range_before_edit_unchanged() {
        let mut buffer = TextBuffer::new("head aaaaaaaaaa");
        buffer.replace(5..15, "a..").unwrap();
        assert_eq!(buffer.map_range(0..4), 0..4);
    }

    #[test]
    fn test_map_range_covering_edit() {
        let mut buffer = TextBuffer::new("0123456789");
        buffer.replace(2..8, "xy").unwrap();
        assert_eq!(buffer.map_range(2..8), 2..4);
        assert_eq!(buffer.map_range(4..6), 2..4);
    }

    #[test]
    fn test_map_range_through_multiple_edits() {
        let mut buffer = TextBuffer::new("LONGLONG a LONGLONG b");
        buffer.replace(0..8, "L.").unwrap();
        let second = buffer.find("LONGLONG").unwrap();
        buffer.replace(second, "L.").unwrap();
        assert_eq!(buffer.as_str(), "L. a L. b");
        assert_eq!(buffer.map_range(9..10), 3..4);
        assert_eq!(buffer.map_range(20..21), 8..9);
    }

    #[test]
    fn test_map_range_since() {
        let mut buffer = TextBuffer::new("xxxx yy");
        buffer.replace(0..4, "x").unwrap();
        // 2..4 is "yy" after the first edit
        buffer.replace(0..1, "zzz").unwrap();
        assert_eq!(buffer.map_range_since(2..4, 1), 4..6);
        assert_eq!(&buffer.as_str()[4..6], "yy");
    }

    #[test]
    fn test_into_string() {
        let buffer: TextBuffer = "hello".into();
        assert_eq!(buffer.into_string(), "hello");
    }
}
