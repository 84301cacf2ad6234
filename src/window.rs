//! Bounded rolling window of display samples.

use std::collections::VecDeque;

/// A fixed-capacity FIFO of the most recent sample values for one axis.
///
/// Pushing to a full window evicts the oldest value, so the window never
/// holds more than `capacity` samples.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl SampleWindow {
    /// Creates a window holding up to `capacity` samples.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity != 0, "sample window capacity must be non-zero");
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `value`, evicting and returning the oldest sample if the
    /// window is full.
    pub fn push(&mut self, value: f32) -> Option<f32> {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the most recently pushed sample.
    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    /// Iterates over the samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }
}
