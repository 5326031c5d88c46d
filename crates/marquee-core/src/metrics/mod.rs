//! Aggregation primitives and the aggregator itself.
//!
//! - `counters`   : counter groups and the decayed-average rule
//! - `window`     : bounded response-time window + nearest-rank percentiles
//! - `frequency`  : occurrence tables behind the popularity rankings
//! - `aggregator` : the shared, lock-protected accumulator
//! - `report`     : snapshot types served to callers
//! - `instrument` : explicit timing wrapper for outbound calls

pub mod aggregator;
pub mod counters;
pub mod frequency;
pub mod instrument;
pub mod kinds;
pub mod report;
pub mod window;

pub use aggregator::MetricsAggregator;
pub use counters::{decayed_average, CacheCounters, RequestActivity, SearchActivity, ServiceUsage};
pub use frequency::FrequencyTable;
pub use instrument::ExternalCall;
pub use kinds::{is_success_status, EndpointCategory, SearchKind};
pub use report::{
    EndpointCount, MemoryUsage, OverallReport, RequestSnapshot, SearchReport, SearchSnapshot,
    Summary, SystemSnapshot, UsageSnapshot, SUMMARY_TOP_N,
};
pub use window::{ResponseTimeStats, ResponseTimeWindow};
