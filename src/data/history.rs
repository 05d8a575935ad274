//! Bounded rolling history of throughput samples.

use std::collections::VecDeque;

use super::counters::ThroughputSample;

/// Default number of samples kept for the throughput chart.
pub const DEFAULT_HISTORY_CAPACITY: usize = 40;

/// Fixed-capacity FIFO of throughput samples, oldest evicted first.
///
/// Insertion order is chronological; the display layer reads the whole
/// buffer each tick via [`snapshot`](SampleHistory::snapshot). There is no
/// removal API beyond capacity eviction and no random-access mutation.
#[derive(Debug, Clone)]
pub struct SampleHistory {
    samples: VecDeque<ThroughputSample>,
    capacity: usize,
}

impl Default for SampleHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SampleHistory {
    /// Create an empty history bounded to `capacity` samples.
    ///
    /// A zero capacity is treated as one: a history that can never hold a
    /// sample is useless to every consumer.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting from the front when over capacity.
    pub fn append(&mut self, sample: ThroughputSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Read-only chronological view of the buffered samples.
    pub fn snapshot(&self) -> impl Iterator<Item = &ThroughputSample> {
        self.samples.iter()
    }

    /// The most recently appended sample, if any.
    pub fn latest(&self) -> Option<&ThroughputSample> {
        self.samples.back()
    }

    /// Number of buffered samples (always <= capacity).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no sample has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
