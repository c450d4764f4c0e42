//! Bounded sliding window over chart points

use std::collections::VecDeque;

/// An ordered sequence retaining only the `capacity` most recent items
///
/// Items are appended at the back; once the window is full each append
/// evicts the oldest item from the front.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> SlidingWindow<T> {
    /// Create an empty window. `capacity` must be validated above 0 by the
    /// caller (see `GeneratorSettings::validate`).
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "window capacity must be above 0");
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> SlidingWindow<T> {
    /// The window contents, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
