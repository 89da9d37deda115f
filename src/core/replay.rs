//! Replay buffer.
//!
//! FIFO of elements that were pulled from a source but not yet irrevocably
//! delivered. The bounded push mode turns the same structure into a sliding
//! window over the most recent elements.

use std::collections::VecDeque;
use std::collections::vec_deque;

/// Ordered FIFO of undelivered elements.
///
/// Insertion order is delivery order: elements are enqueued at the tail and
/// dequeued from the head.
///
/// # Examples
///
/// ```
/// use replay_cursor::core::ReplayBuffer;
///
/// let mut window = ReplayBuffer::new();
/// for i in 1..=5 {
///     window.push_bounded(i, 2);
/// }
/// assert_eq!(window.try_dequeue(), Some(4));
/// assert_eq!(window.try_dequeue(), Some(5));
/// assert!(window.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayBuffer<T> {
    items: VecDeque<T>,
}

impl<T> Default for ReplayBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReplayBuffer<T> {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty buffer with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends an element at the tail.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the element at the head, if any.
    pub fn try_dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Appends an element and evicts from the head until at most `capacity`
    /// elements remain.
    ///
    /// Returns the last evicted element. With a `capacity` of zero the pushed
    /// element itself is evicted.
    pub fn push_bounded(&mut self, item: T, capacity: usize) -> Option<T> {
        self.items.push_back(item);
        let mut evicted = None;
        while self.items.len() > capacity {
            evicted = self.items.pop_front();
        }
        evicted
    }

    /// Number of buffered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the buffered elements in delivery order.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Extend<T> for ReplayBuffer<T> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for ReplayBuffer<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ReplayBuffer<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ReplayBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut buffer = ReplayBuffer::new();
        buffer.enqueue('a');
        buffer.enqueue('b');
        buffer.enqueue('c');
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.try_dequeue(), Some('a'));
        assert_eq!(buffer.try_dequeue(), Some('b'));
        assert_eq!(buffer.try_dequeue(), Some('c'));
        assert_eq!(buffer.try_dequeue(), None);
    }

    #[test]
    fn test_push_bounded_evicts_oldest() {
        let mut buffer = ReplayBuffer::with_capacity(3);
        assert_eq!(buffer.push_bounded(1, 3), None);
        assert_eq!(buffer.push_bounded(2, 3), None);
        assert_eq!(buffer.push_bounded(3, 3), None);
        assert_eq!(buffer.push_bounded(4, 3), Some(1));
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
    }

    #[test]
    fn test_push_bounded_shrinks_oversized_buffer() {
        let mut buffer: ReplayBuffer<i32> = (1..=5).collect();
        assert_eq!(buffer.push_bounded(6, 2), Some(4));
        let items: Vec<_> = buffer.into_iter().collect();
        assert_eq!(items, vec![5, 6]);
    }

    #[test]
    fn test_push_bounded_zero_capacity() {
        let mut buffer = ReplayBuffer::new();
        assert_eq!(buffer.push_bounded("x", 0), Some("x"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_extend_appends_at_tail() {
        let mut window: ReplayBuffer<i32> = [3, 4].into_iter().collect();
        let residue: ReplayBuffer<i32> = [5, 6].into_iter().collect();
        window.extend(residue);
        let items: Vec<_> = (&window).into_iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_default_is_empty() {
        let buffer: ReplayBuffer<String> = ReplayBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }
}
