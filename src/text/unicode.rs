//! Unicode-aware tokenization.
//!
//! Segments text into grapheme clusters or words and scans the segments into
//! overlapping n-grams. Segmentation is lazy: the text is never collected
//! into an intermediate vector of segments.

use unicode_segmentation::{Graphemes, UnicodeSegmentation};

use crate::chunking::scan_subsequences;
use crate::core::StatefulCursor;
use crate::error::Result;

/// Wraps the extended grapheme clusters of `text` in a cursor context.
///
/// # Examples
///
/// ```
/// use replay_cursor::text::grapheme_cursor;
///
/// let mut cursor = grapheme_cursor("y\u{306}es");
/// let first: Vec<_> = cursor.resume().take(1).collect();
/// assert_eq!(first, vec!["y\u{306}"]);
/// ```
#[must_use]
pub fn grapheme_cursor(text: &str) -> StatefulCursor<Graphemes<'_>> {
    StatefulCursor::new(text.graphemes(true))
}

/// Overlapping grapheme n-grams of `text`, each at most `n` graphemes long.
///
/// Text shorter than `n` graphemes yields a single shorter n-gram; empty
/// text yields none.
///
/// # Errors
///
/// Returns [`crate::Error::TokenLength`] if `n` is below 2.
///
/// # Examples
///
/// ```
/// use replay_cursor::text::grapheme_ngrams;
///
/// assert_eq!(grapheme_ngrams("世界!", 2)?, vec!["世界", "界!"]);
/// # Ok::<(), replay_cursor::Error>(())
/// ```
pub fn grapheme_ngrams(text: &str, n: usize) -> Result<Vec<String>> {
    joined_ngrams(text.graphemes(true), n, "")
}

/// Overlapping word n-grams (shingles) of `text`, joined by single spaces.
///
/// Words follow Unicode word boundaries; punctuation and whitespace are
/// dropped.
///
/// # Errors
///
/// Returns [`crate::Error::TokenLength`] if `n` is below 2.
pub fn word_shingles(text: &str, n: usize) -> Result<Vec<String>> {
    joined_ngrams(text.unicode_words(), n, " ")
}

fn joined_ngrams<'a, I>(segments: I, n: usize, separator: &str) -> Result<Vec<String>>
where
    I: Iterator<Item = &'a str>,
{
    let mut cursor = StatefulCursor::new(segments);
    let ngrams = scan_subsequences(&mut cursor, n)?
        .map(|token| token.join(separator))
        .collect();
    Ok(ngrams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_grapheme_ngrams_ascii() {
        let ngrams = grapheme_ngrams("abcd", 3).unwrap();
        assert_eq!(ngrams, vec!["abc", "bcd"]);
    }

    #[test]
    fn test_grapheme_ngrams_keep_clusters_whole() {
        // 'e' + combining acute accent is a single grapheme.
        let ngrams = grapheme_ngrams("ae\u{301}b", 2).unwrap();
        assert_eq!(ngrams, vec!["ae\u{301}", "e\u{301}b"]);
    }

    #[test]
    fn test_grapheme_ngrams_short_and_empty() {
        assert_eq!(grapheme_ngrams("a", 2).unwrap(), vec!["a"]);
        assert!(grapheme_ngrams("", 2).unwrap().is_empty());
    }

    #[test]
    fn test_grapheme_ngrams_rejects_unigrams() {
        assert_eq!(
            grapheme_ngrams("abc", 1),
            Err(Error::TokenLength { length: 1 })
        );
    }

    #[test]
    fn test_word_shingles() {
        let shingles = word_shingles("The quick, brown fox!", 2).unwrap();
        assert_eq!(shingles, vec!["The quick", "quick brown", "brown fox"]);
    }

    #[test]
    fn test_word_shingles_longer_than_text() {
        let shingles = word_shingles("Hello world", 5).unwrap();
        assert_eq!(shingles, vec!["Hello world"]);
    }

    #[test]
    fn test_grapheme_cursor_resumes() {
        let mut cursor = grapheme_cursor("Hello 世界");
        let head: String = cursor.resume().take(6).collect();
        assert_eq!(head, "Hello ");
        let tail: String = cursor.resume().collect();
        assert_eq!(tail, "世界");
    }
}
