//! Fixed-size partitioning.
//!
//! Splits a sequence into consecutive, non-overlapping groups by issuing one
//! `resume` read per group and abandoning it after `size` elements.

use std::fmt;

use crate::core::StatefulCursor;
use crate::error::{Error, Result};

/// Lazy sequence of fixed-size groups.
///
/// Every group holds exactly `size` elements except possibly the last, which
/// is shorter when the source ends mid-group. The sequence is not
/// restartable: it owns the source.
///
/// # Examples
///
/// ```
/// use replay_cursor::chunking::partition;
///
/// let groups: Vec<Vec<i32>> = partition(vec![1, 2, 3], 2)?.collect();
/// assert_eq!(groups, vec![vec![1, 2], vec![3]]);
/// # Ok::<(), replay_cursor::Error>(())
/// ```
pub struct Partitions<I: Iterator> {
    cursor: StatefulCursor<I>,
    size: usize,
}

impl<I> fmt::Debug for Partitions<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partitions")
            .field("cursor", &self.cursor)
            .field("size", &self.size)
            .finish()
    }
}

impl<I: Iterator> Partitions<I> {
    /// Group size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Releases the underlying cursor, including anything not yet grouped.
    #[must_use]
    pub fn into_cursor(self) -> StatefulCursor<I> {
        self.cursor
    }
}

/// Partitions `source` into groups of `size` elements.
///
/// # Errors
///
/// Returns [`Error::PartitionSize`] if `size` is zero.
pub fn partition<S>(source: S, size: usize) -> Result<Partitions<S::IntoIter>>
where
    S: IntoIterator,
{
    if size == 0 {
        return Err(Error::PartitionSize { size });
    }
    Ok(Partitions {
        cursor: StatefulCursor::new(source),
        size,
    })
}

impl<I: Iterator> Iterator for Partitions<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_exhausted() {
            return None;
        }
        let group: Vec<_> = self.cursor.resume().take(self.size).collect();
        (!group.is_empty()).then_some(group)
    }
}
