//! Plain counter groups held by the aggregator and copied out on snapshot.

use serde::Serialize;

/// Blend a new sample into a running figure: `(avg + sample) / 2`.
///
/// This is a decayed moving average, not an arithmetic mean. The newest
/// sample always carries half the weight, the one before it a quarter, and
/// so on; the very first sample is blended against the zero start value.
#[inline]
pub fn decayed_average(avg: f64, sample: f64) -> f64 {
    (avg + sample) / 2.0
}

/// Usage of one external dependency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsage {
    pub requests: u64,
    /// Never exceeds `requests`.
    pub errors: u64,
    /// Decayed average over successful calls only.
    pub avg_response_time_ms: f64,
    /// Epoch milliseconds of the most recent call, `None` until first use.
    pub last_used_at_ms: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchActivity {
    pub movie_searches: u64,
    pub tv_searches: u64,
    pub multi_searches: u64,
    /// Decayed average over successful searches only.
    pub avg_results_count: f64,
    pub search_errors: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestActivity {
    pub total_requests: u64,
    pub auth_requests: u64,
    pub collaboration_requests: u64,
    /// Percentage (0..=100 under normal traffic).
    pub error_rate: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheCounters {
    pub hits: u64,
    pub misses: u64,
}

impl CacheCounters {
    /// Hit percentage, 0 when nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        percentage(self.hits, self.hits + self.misses)
    }
}

/// `part / whole * 100`, short-circuiting a zero denominator to 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
