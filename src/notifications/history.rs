// SPDX-License-Identifier: MPL-2.0
//! Bounded history of retired notifications.
//!
//! Retired toasts are kept in a memory-bounded ring buffer that evicts the
//! oldest entry once capacity is reached, so a page can show "recent
//! notifications" without growing forever.

use crate::config::defaults::{
    DEFAULT_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY, MIN_HISTORY_CAPACITY,
};
use std::collections::VecDeque;

/// Number of retired notifications kept in history.
///
/// Always within `MIN_HISTORY_CAPACITY..=MAX_HISTORY_CAPACITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(DEFAULT_HISTORY_CAPACITY)
    }
}

/// A generic circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use notification_center::notifications::{CircularBuffer, HistoryCapacity};
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(HistoryCapacity::new(2));
///
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: HistoryCapacity) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_capacity_clamps_to_valid_range() {
        assert_eq!(HistoryCapacity::new(0).value(), MIN_HISTORY_CAPACITY);
        assert_eq!(HistoryCapacity::new(100_000).value(), MAX_HISTORY_CAPACITY);
        assert_eq!(HistoryCapacity::new(20).value(), 20);
    }

    #[test]
    fn history_capacity_default_returns_expected_value() {
        assert_eq!(HistoryCapacity::default().value(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn circular_buffer_overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(HistoryCapacity::new(3));

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.push(4); // Evicts 1
        buffer.push(5); // Evicts 2

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn circular_buffer_newest_is_last() {
        let mut buffer: CircularBuffer<&str> = CircularBuffer::new(HistoryCapacity::new(5));
        buffer.push("saved");
        buffer.push("failed");

        assert_eq!(buffer.iter().next_back(), Some(&"failed"));
    }

    #[test]
    fn circular_buffer_clear_keeps_capacity() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(HistoryCapacity::new(5));

        buffer.push(1);
        buffer.push(2);
        assert!(!buffer.is_empty());

        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 5);
    }
}
