//! Immutable snapshot types returned to reporting callers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::counters::{RequestActivity, SearchActivity, ServiceUsage};
use super::window::ResponseTimeStats;

/// Number of entries carried by each ranking in the report summary.
pub const SUMMARY_TOP_N: usize = 5;

/// Per-dependency usage keyed by service name.
pub type UsageSnapshot = BTreeMap<String, ServiceUsage>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointCount {
    pub endpoint: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnapshot {
    #[serde(flatten)]
    pub activity: SearchActivity,
    /// Query texts, most frequent first.
    pub popular_queries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSnapshot {
    #[serde(flatten)]
    pub activity: RequestActivity,
    pub popular_endpoints: Vec<EndpointCount>,
}

/// Process memory figures supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub resident_bytes: u64,
    pub virtual_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSnapshot {
    /// `None` until the host merges its own figures.
    pub memory: Option<MemoryUsage>,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub cache_hit_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    #[serde(flatten)]
    pub activity: SearchActivity,
    pub popular_queries: Vec<String>,
    pub popular_endpoints: Vec<EndpointCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_requests: u64,
    pub error_rate: f64,
    pub cache_hit_rate: f64,
    pub top_endpoints: Vec<EndpointCount>,
    pub top_queries: Vec<String>,
}

/// Everything the status endpoint serves, taken under a single read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallReport {
    pub timestamp: DateTime<Utc>,
    pub uptime_ms: u64,
    pub response_time: ResponseTimeStats,
    pub api: UsageSnapshot,
    pub search: SearchReport,
    pub users: RequestActivity,
    pub system: SystemSnapshot,
    pub summary: Summary,
}

impl OverallReport {
    /// Merge host memory figures into the `system` section.
    pub fn with_memory(mut self, memory: MemoryUsage) -> Self {
        self.system.memory = Some(memory);
        self
    }
}
