//! Fixed-capacity sliding window of scalar samples.
//!
//! Backs the per-axis differencing buffers and the smoothing windows of
//! the detection loop. When the window is full, pushing a new sample
//! evicts the oldest one.

use std::collections::vec_deque::Iter;
use std::collections::VecDeque;

/// A sliding window holding at most `capacity` samples.
///
/// The running average of an empty window is defined as zero. The loop
/// relies on that: threshold checks are well-defined from the very
/// first tick, before any sample has been buffered.
#[derive(Debug, Clone)]
pub struct ScalarWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl ScalarWindow {
    /// Creates a new window with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if capacity is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ScalarWindow capacity must be greater than 0");
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a sample into the window.
    ///
    /// If the window is at capacity, the oldest sample is evicted first.
    pub fn push(&mut self, sample: f64) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Arithmetic mean of the buffered samples, or zero when empty.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Returns the current number of buffered samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the window holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns true once the window has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    /// Returns the maximum capacity of the window.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest buffered sample, if any.
    pub fn front(&self) -> Option<f64> {
        self.samples.front().copied()
    }

    /// Most recently pushed sample, if any.
    pub fn back(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Returns an iterator over the samples, oldest first.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.samples.iter()
    }

    /// Removes all samples from the window.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl PartialEq for ScalarWindow {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.samples == other.samples
    }
}

impl Default for ScalarWindow {
    /// Creates a window with the loop's smoothing depth of 10.
    fn default() -> Self {
        Self::new(10)
    }
}
