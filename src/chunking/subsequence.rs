//! Overlapping subsequence scanning.
//!
//! Tokenizes a cursor into windows of `max_length` elements where each
//! window overlaps the next by `max_length - 1` elements. Overlap comes from
//! the cursor's lookback buffer, so the source is still pulled exactly once.
//!
//! Each step first probes for one more element with a single-element
//! compensating read. The probe leaves the element in the replay buffer, so
//! the token read that follows starts with it and carries its own trailing
//! `max_length - 1` elements forward to the next step.

use std::fmt;
use std::num::NonZeroUsize;

use crate::chunking::traits::ScanConfig;
use crate::core::StatefulCursor;
use crate::error::{Error, Result};

/// Lazy sequence of overlapping tokens borrowed from a cursor.
///
/// Dropping the scanner leaves the cursor usable: the tail of the last
/// emitted token sits in its replay buffer.
pub struct Subsequences<'a, I: Iterator>
where
    I::Item: Clone,
{
    cursor: &'a mut StatefulCursor<I>,
    max_length: usize,
    lookback: NonZeroUsize,
    remaining: Option<usize>,
}

impl<I> fmt::Debug for Subsequences<'_, I>
where
    I: Iterator + fmt::Debug,
    I::Item: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subsequences")
            .field("cursor", &self.cursor)
            .field("max_length", &self.max_length)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Scans `cursor` into overlapping tokens of at most `max_length` elements.
///
/// # Errors
///
/// Returns [`Error::TokenLength`] if `max_length` is below 2.
///
/// # Examples
///
/// ```
/// use replay_cursor::StatefulCursor;
/// use replay_cursor::chunking::scan_subsequences;
///
/// let mut cursor = StatefulCursor::new(1..=4);
/// let tokens: Vec<_> = scan_subsequences(&mut cursor, 2)?.collect();
/// assert_eq!(tokens, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
/// # Ok::<(), replay_cursor::Error>(())
/// ```
pub fn scan_subsequences<I>(
    cursor: &mut StatefulCursor<I>,
    max_length: usize,
) -> Result<Subsequences<'_, I>>
where
    I: Iterator,
    I::Item: Clone,
{
    let lookback = max_length
        .checked_sub(1)
        .and_then(NonZeroUsize::new)
        .ok_or(Error::TokenLength { length: max_length })?;
    Ok(Subsequences {
        cursor,
        max_length,
        lookback,
        remaining: None,
    })
}

/// Scans `cursor` according to `config`.
///
/// A `max_tokens` of zero means unlimited.
///
/// # Errors
///
/// Returns [`Error::TokenLength`] if the configured `max_length` is below 2.
pub fn scan_with<'a, I>(
    cursor: &'a mut StatefulCursor<I>,
    config: &ScanConfig,
) -> Result<Subsequences<'a, I>>
where
    I: Iterator,
    I::Item: Clone,
{
    config.validate()?;
    let mut scanner = scan_subsequences(cursor, config.max_length)?;
    scanner.remaining = (config.max_tokens > 0).then_some(config.max_tokens);
    Ok(scanner)
}

impl<I: Iterator> Subsequences<'_, I>
where
    I::Item: Clone,
{
    /// Maximum token length.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl<I: Iterator> Iterator for Subsequences<'_, I>
where
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) || self.cursor.is_exhausted() {
            return None;
        }
        if self.cursor.compensate_one().take(1).count() == 0 {
            return None;
        }
        let token: Vec<_> = self
            .cursor
            .lookback(self.lookback)
            .take(self.max_length)
            .collect();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pairs_overlap_by_one() {
        let mut cursor = StatefulCursor::new(1..=5);
        let tokens: Vec<_> = scan_subsequences(&mut cursor, 2).unwrap().collect();
        assert_eq!(
            tokens,
            vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]
        );
        assert_eq!(cursor.pulled(), 5);
    }

    #[test]
    fn test_triples_overlap_by_two() {
        let mut cursor = StatefulCursor::new(1..=5);
        let tokens: Vec<_> = scan_subsequences(&mut cursor, 3).unwrap().collect();
        assert_eq!(tokens, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
    }

    #[test]
    fn test_short_source_yields_single_short_token() {
        let mut cursor = StatefulCursor::new(vec!['a']);
        let tokens: Vec<_> = scan_subsequences(&mut cursor, 3).unwrap().collect();
        assert_eq!(tokens, vec![vec!['a']]);
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        let mut cursor = StatefulCursor::new(Vec::<u8>::new());
        assert_eq!(scan_subsequences(&mut cursor, 2).unwrap().count(), 0);
    }

    #[test]
    fn test_rejects_short_tokens() {
        let mut cursor = StatefulCursor::new(1..=3);
        for length in [0, 1] {
            let err = scan_subsequences(&mut cursor, length).unwrap_err();
            assert_eq!(err, Error::TokenLength { length });
        }
        assert_eq!(cursor.pulled(), 1);
    }

    #[test]
    fn test_find_subsequences_then_resume() {
        let mut cursor = StatefulCursor::new((1..=10_000).map(|i| i % 100));
        let wanted: HashSet<i32> = [1, 2].into_iter().collect();

        let found: Vec<_> = scan_subsequences(&mut cursor, 2)
            .unwrap()
            .filter(|token| token.iter().copied().collect::<HashSet<_>>() == wanted)
            .take(3)
            .collect();
        assert_eq!(found, vec![vec![1, 2]; 3]);

        // The tail of the last token is replayed, then the rest of the source.
        assert_eq!(cursor.resume().count(), 1 + (10_000 - 202));
    }

    #[test]
    fn test_scan_with_token_limit() {
        let mut cursor = StatefulCursor::new(1..=10);
        let config = ScanConfig::with_max_length(3).max_tokens(2);
        let tokens: Vec<_> = scan_with(&mut cursor, &config).unwrap().collect();
        assert_eq!(tokens, vec![vec![1, 2, 3], vec![2, 3, 4]]);
        let rest: Vec<_> = cursor.resume().collect();
        assert_eq!(rest, vec![3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_scan_with_unlimited() {
        let mut cursor = StatefulCursor::new("abcd".chars());
        let config = ScanConfig::new();
        let scanner = scan_with(&mut cursor, &config).unwrap();
        assert_eq!(scanner.max_length(), 2);
        assert_eq!(scanner.count(), 3);
    }

    #[test]
    fn test_scanner_debug() {
        let mut cursor = StatefulCursor::new(1..=4);
        let config = ScanConfig::with_max_length(3).max_tokens(1);
        let scanner = scan_with(&mut cursor, &config).unwrap();
        let rendered = format!("{scanner:?}");
        assert!(rendered.starts_with("Subsequences"));
        assert!(rendered.contains("max_length: 3"));
        assert!(rendered.contains("remaining: Some(1)"));
    }
}
