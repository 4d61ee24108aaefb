//! Text truncation for over-length URLs
//!
//! Lengths are counted in extended grapheme clusters so an emoji or a
//! combining sequence is never cut in half.

use unicode_segmentation::UnicodeSegmentation;

/// Suffix appended to a shortened word
pub const ELLIPSIS: &str = "...";

/// Produces the display form of a word that is longer than `max_len`
pub trait Truncator {
    fn truncate(&self, word: &str, max_len: usize) -> String;
}

/// Keep the first `max_len` graphemes and append `...`
#[derive(Debug, Clone, Copy, Default)]
pub struct Ellipsis;

impl Truncator for Ellipsis {
    fn truncate(&self, word: &str, max_len: usize) -> String {
        if grapheme_len(word) <= max_len {
            return word.to_string();
        }
        let mut short: String = word.graphemes(true).take(max_len).collect();
        short.push_str(ELLIPSIS);
        short
    }
}

impl<F> Truncator for F
where
    F: Fn(&str, usize) -> String,
{
    fn truncate(&self, word: &str, max_len: usize) -> String {
        self(word, max_len)
    }
}

/// User-perceived character count
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_word_unchanged() {
        assert_eq!(Ellipsis.truncate("http://a.io", 20), "http://a.io");
        assert_eq!(Ellipsis.truncate("abc", 3), "abc");
    }

    #[test]
    fn test_long_word_ellipsized() {
        assert_eq!(
            Ellipsis.truncate("http://averyveryverylongurl.com", 10),
            "http://ave..."
        );
    }

    #[test]
    fn test_grapheme_boundaries() {
        // "e" + combining acute is one grapheme, two chars
        let word = "e\u{301}e\u{301}e\u{301}";
        assert_eq!(grapheme_len(word), 3);
        assert_eq!(Ellipsis.truncate(word, 2), "e\u{301}e\u{301}...");
    }

    #[test]
    fn test_zero_max_len() {
        assert_eq!(Ellipsis.truncate("abc", 0), "...");
    }

    #[test]
    fn test_closure_truncator() {
        let cut = |word: &str, max: usize| word.chars().take(max).collect::<String>();
        assert_eq!(cut.truncate("abcdef", 2), "ab");
    }
}
