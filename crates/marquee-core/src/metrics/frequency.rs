//! Occurrence counting with first-seen tie breaking.
//!
//! Each key remembers the sequence number of its first occurrence, so the
//! ranking is a stable sort: higher count first, earlier first-seen on ties.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::trace;

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: u64,
    first_seen: u64,
}

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: HashMap<String, Entry>,
    seq: u64,
    max_keys: Option<usize>,
}

impl FrequencyTable {
    /// Unbounded table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding at most `max_keys` distinct keys when `Some`.
    ///
    /// A new key arriving at capacity evicts the least frequent key
    /// (oldest first-seen among equals).
    pub fn with_max_keys(max_keys: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            seq: 0,
            max_keys,
        }
    }

    /// Count one occurrence of `key` and return its new count.
    pub fn increment(&mut self, key: &str) -> u64 {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.count += 1;
            return entry.count;
        }

        if let Some(max) = self.max_keys {
            if self.entries.len() >= max {
                self.evict_one();
            }
        }

        let first_seen = self.seq;
        self.seq += 1;
        self.entries.insert(key.to_string(), Entry { count: 1, first_seen });
        1
    }

    pub fn count(&self, key: &str) -> u64 {
        self.entries.get(key).map(|e| e.count).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.seq = 0;
    }

    /// The `n` most frequent keys with their counts, ranked.
    ///
    /// Only the first `n` entries are fully sorted.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        if n == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<(&String, &Entry)> = self.entries.iter().collect();
        if ranked.len() > n {
            ranked.select_nth_unstable_by(n - 1, |a, b| rank(a.1, b.1));
            ranked.truncate(n);
        }
        // first_seen is unique, so the unstable sort is deterministic.
        ranked.sort_unstable_by(|a, b| rank(a.1, b.1));

        ranked
            .into_iter()
            .map(|(k, e)| (k.clone(), e.count))
            .collect()
    }

    fn evict_one(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by(|a, b| {
                a.1.count
                    .cmp(&b.1.count)
                    .then(a.1.first_seen.cmp(&b.1.first_seen))
            })
            .map(|(k, _)| k.clone());

        if let Some(key) = victim {
            trace!(key = %key, "frequency table at capacity, evicting");
            self.entries.remove(&key);
        }
    }
}

/// Higher count first, earlier first-seen among equals.
fn rank(a: &Entry, b: &Entry) -> Ordering {
    b.count
        .cmp(&a.count)
        .then(a.first_seen.cmp(&b.first_seen))
}
