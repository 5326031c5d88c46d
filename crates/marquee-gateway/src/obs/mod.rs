//! Observation glue between the HTTP stack and the metrics aggregator.
//!
//! - `middleware` : records every completed request
//! - `system`     : process memory figures for the status report

pub mod middleware;
pub mod system;

pub use middleware::{track_requests, UNMATCHED_ENDPOINT};
pub use system::{MemoryProbe, ProcessMemoryProbe};
