//! Forward-only source cursor.
//!
//! Wraps any [`Iterator`] in the pull contract the stateful cursor relies on:
//! `try_advance` pulls exactly one element, `current` exposes it until it is
//! taken. Once the iterator reports its end the cursor stays exhausted and
//! never polls the iterator again.
//!
//! A pull that never returned (the iterator panicked inside `next`) also
//! exhausts the cursor. The broken iterator is not polled a second time, so
//! cleanup running during unwinding cannot panic again.

use tracing::{debug, trace};

/// One-shot, pull-based element provider.
///
/// Pulling is destructive: an element that has been advanced past (or taken)
/// cannot be read again from the cursor itself.
///
/// # Examples
///
/// ```
/// use replay_cursor::core::SourceCursor;
///
/// let mut cursor = SourceCursor::new([1, 2].into_iter());
/// assert!(cursor.try_advance());
/// assert_eq!(cursor.current(), Some(&1));
/// assert!(cursor.try_advance());
/// assert!(!cursor.try_advance());
/// assert!(cursor.is_exhausted());
/// ```
#[derive(Debug)]
pub struct SourceCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    exhausted: bool,
    in_flight: bool,
    pulled: usize,
}

impl<I: Iterator> SourceCursor<I> {
    /// Creates a cursor positioned before the first element.
    #[must_use]
    pub const fn new(iter: I) -> Self {
        Self {
            iter,
            current: None,
            exhausted: false,
            in_flight: false,
            pulled: 0,
        }
    }

    /// Pulls the next element into `current`.
    ///
    /// Returns `false` once the source has no further elements; from then on
    /// the cursor is exhausted and `current` is empty. The same holds after
    /// an earlier pull was interrupted by a panic in the iterator.
    pub fn try_advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if self.in_flight {
            self.current = None;
            self.exhausted = true;
            debug!(
                pulled = self.pulled,
                "source interrupted mid-pull, treating as exhausted"
            );
            return false;
        }
        self.in_flight = true;
        let next = self.iter.next();
        self.in_flight = false;
        if let Some(item) = next {
            self.current = Some(item);
            self.pulled += 1;
            true
        } else {
            self.current = None;
            self.exhausted = true;
            trace!(pulled = self.pulled, "source exhausted");
            false
        }
    }

    /// Returns the element produced by the last successful advance, unless
    /// it has already been taken.
    #[must_use]
    pub const fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Moves the current element out of the cursor.
    pub fn take_current(&mut self) -> Option<I::Item> {
        self.current.take()
    }

    /// Whether the source has reported that no further elements exist.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of elements pulled from the source so far.
    #[must_use]
    pub const fn pulled(&self) -> usize {
        self.pulled
    }
}
