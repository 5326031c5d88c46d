//! Bounded rolling window of response-time samples.
//!
//! Samples are whole milliseconds. Distribution statistics are derived on
//! demand from a sorted copy; the window itself keeps arrival order so the
//! oldest sample is evicted first.

use std::collections::VecDeque;

use serde::Serialize;

/// Response-time distribution over the current window (milliseconds).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResponseTimeStats {
    pub avg: u64,
    pub min: u64,
    pub max: u64,
    pub p95: u64,
    pub p99: u64,
}

#[derive(Debug, Clone)]
pub struct ResponseTimeWindow {
    samples: VecDeque<u64>,
    capacity: usize,
}

impl ResponseTimeWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a sample, evicting the oldest once the window is full.
    #[inline]
    pub fn push(&mut self, millis: u64) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(millis);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Compute avg/min/max and nearest-rank p95/p99.
    ///
    /// Percentiles index the sorted copy at `floor(n * p)` without
    /// interpolation; an index past the end falls back to `max`.
    /// An empty window reports all zeros.
    pub fn stats(&self) -> ResponseTimeStats {
        if self.samples.is_empty() {
            return ResponseTimeStats::default();
        }

        let mut sorted: Vec<u64> = self.samples.iter().copied().collect();
        sorted.sort_unstable();

        let n = sorted.len();
        let sum: u128 = sorted.iter().map(|&v| v as u128).sum();
        let avg = (sum as f64 / n as f64).round() as u64;
        let min = sorted[0];
        let max = sorted[n - 1];

        ResponseTimeStats {
            avg,
            min,
            max,
            p95: nearest_rank(&sorted, 0.95, max),
            p99: nearest_rank(&sorted, 0.99, max),
        }
    }
}

fn nearest_rank(sorted: &[u64], percentile: f64, max: u64) -> u64 {
    let index = (sorted.len() as f64 * percentile).floor() as usize;
    sorted.get(index).copied().unwrap_or(max)
}
