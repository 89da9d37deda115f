//! Stateful cursor context.
//!
//! Owns a [`SourceCursor`] and a [`ReplayBuffer`] and hands out resumable
//! reads over them. Every read delivers the replay buffer first and then
//! pulls fresh elements. Whatever prefix of a read the caller consumes is
//! delivered for good; the unconsumed suffix is picked up by the next read.
//!
//! The source always holds one pre-fetched, undelivered element while it is
//! not exhausted. A read that hands out that element leaves the slot empty,
//! and the read's `Drop` refills it before control returns to the caller.
//! This runs on every exit path: full drain, early abandonment (`take`,
//! `find`, `take_while`, simply dropping the read) or unwinding. If the
//! source itself panicked, the refill finds it interrupted and marks it
//! exhausted instead of polling it again.

use std::fmt;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::core::{ReplayBuffer, SourceCursor};
use crate::error::{Error, Result};

/// Resumable cursor over a one-shot source.
///
/// A read borrows the context mutably, so at most one read can be live at a
/// time.
///
/// # Examples
///
/// ```
/// use replay_cursor::StatefulCursor;
///
/// let mut cursor = StatefulCursor::new(vec![1, 2, 3, 4, 5, 6]);
///
/// let head: Vec<_> = cursor.resume().take(3).collect();
/// assert_eq!(head, vec![1, 2, 3]);
///
/// let tail: Vec<_> = cursor.resume().collect();
/// assert_eq!(tail, vec![4, 5, 6]);
/// assert!(cursor.is_exhausted());
/// ```
#[derive(Debug)]
pub struct StatefulCursor<I: Iterator> {
    source: SourceCursor<I>,
    pending: ReplayBuffer<I::Item>,
}

impl<I: Iterator> StatefulCursor<I> {
    /// Wraps a source and pre-fetches its first element.
    ///
    /// The source is owned by the context from here on and is released when
    /// the context is dropped.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        let mut source = SourceCursor::new(source.into_iter());
        source.try_advance();
        Self {
            source,
            pending: ReplayBuffer::new(),
        }
    }

    /// Whether the wrapped source has reported that no further elements
    /// exist.
    ///
    /// Once true this never reverts. It does not certify that the replay
    /// buffer has been redelivered; see [`Self::is_drained`].
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.source.is_exhausted()
    }

    /// Whether no data is available at all, neither buffered nor fresh.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.is_exhausted() && self.pending.is_empty()
    }

    /// Number of elements waiting in the replay buffer.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of elements pulled from the source so far.
    #[must_use]
    pub const fn pulled(&self) -> usize {
        self.source.pulled()
    }

    /// Starts a read that resumes exactly where the previous one stopped.
    ///
    /// The read first drains the replay buffer, then pulls from the source.
    /// It may be abandoned at any point without losing or duplicating
    /// elements.
    pub fn resume(&mut self) -> Resume<'_, I> {
        self.settle();
        Resume { cursor: self }
    }

    /// Starts a read that remembers the last `window_size` delivered
    /// elements.
    ///
    /// Delivery is identical to [`Self::resume`]. When the read ends, by
    /// drain or by abandonment, the remembered elements become the head of
    /// the replay buffer, so the next read sees them again. A window at least
    /// as large as everything delivered rewinds to where this read began.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WindowSize`] if `window_size` is zero. No element is
    /// pulled and no state changes in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use replay_cursor::StatefulCursor;
    ///
    /// let mut cursor = StatefulCursor::new(1..=6);
    /// let seen = cursor.compensate(2)?.take_while(|&i| i < 4).count();
    /// assert_eq!(seen, 3);
    ///
    /// let rest: Vec<_> = cursor.resume().collect();
    /// assert_eq!(rest, vec![3, 4, 5, 6]);
    /// # Ok::<(), replay_cursor::Error>(())
    /// ```
    pub fn compensate(&mut self, window_size: usize) -> Result<Compensate<'_, I>>
    where
        I::Item: Clone,
    {
        let window =
            NonZeroUsize::new(window_size).ok_or(Error::WindowSize { size: window_size })?;
        Ok(self.lookback(window))
    }

    /// Compensating read with a window of one element.
    pub fn compensate_one(&mut self) -> Compensate<'_, I>
    where
        I::Item: Clone,
    {
        self.lookback(NonZeroUsize::MIN)
    }

    pub(crate) fn lookback(&mut self, window: NonZeroUsize) -> Compensate<'_, I>
    where
        I::Item: Clone,
    {
        self.settle();
        Compensate {
            window: ReplayBuffer::with_capacity(window.get()),
            capacity: window.get(),
            cursor: self,
        }
    }

    /// Restores the pre-fetch invariant after a fresh element was handed out.
    fn settle(&mut self) {
        if !self.source.is_exhausted() && self.source.current().is_none() {
            self.source.try_advance();
        }
    }

    fn deliver(&mut self) -> Option<I::Item> {
        if let Some(item) = self.pending.try_dequeue() {
            return Some(item);
        }
        self.settle();
        self.source.take_current()
    }

    /// Buffered plus pre-fetched elements; exact once the source is exhausted.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let known = self.pending.len() + usize::from(self.source.current().is_some());
        if self.is_exhausted() {
            (known, Some(known))
        } else {
            (known, None)
        }
    }
}

/// Read returned by [`StatefulCursor::resume`].
pub struct Resume<'a, I: Iterator> {
    cursor: &'a mut StatefulCursor<I>,
}

impl<I> fmt::Debug for Resume<'_, I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resume")
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<I: Iterator> Iterator for Resume<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.deliver()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<I: Iterator> FusedIterator for Resume<'_, I> {}

impl<I: Iterator> Drop for Resume<'_, I> {
    fn drop(&mut self) {
        self.cursor.settle();
        trace!(
            pending = self.cursor.pending.len(),
            exhausted = self.cursor.is_exhausted(),
            "resume read finished"
        );
    }
}

/// Read returned by [`StatefulCursor::compensate`].
#[derive(Debug)]
pub struct Compensate<'a, I: Iterator>
where
    I::Item: Clone,
{
    cursor: &'a mut StatefulCursor<I>,
    window: ReplayBuffer<I::Item>,
    capacity: usize,
}

impl<I: Iterator> Iterator for Compensate<'_, I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.deliver()?;
        self.window.push_bounded(item.clone(), self.capacity);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<I: Iterator> FusedIterator for Compensate<'_, I> where I::Item: Clone {}

impl<I: Iterator> Drop for Compensate<'_, I>
where
    I::Item: Clone,
{
    fn drop(&mut self) {
        self.cursor.settle();
        let replayed = self.window.len();
        // Undelivered residue stays behind the window, in order.
        let residue = std::mem::take(&mut self.cursor.pending);
        let mut pending = std::mem::take(&mut self.window);
        pending.extend(residue);
        self.cursor.pending = pending;
        debug!(
            window = self.capacity,
            replayed,
            pending = self.cursor.pending.len(),
            "compensate read installed lookback"
        );
    }
}
