//! marquee core: in-process usage telemetry for a media backend.
//!
//! This crate owns the [`MetricsAggregator`] and every value type it reports:
//! per-dependency usage counters, search and request activity, a bounded
//! response-time window, popularity rankings, and the composed status report.
//! It intentionally carries no transport or runtime dependencies so the host
//! (HTTP gateway, workers, tests) decides how events reach it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Misuse (unregistered service names, bad config) surfaces as
//! `MarqueeError`/`Result`; record and snapshot paths never divide by zero.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod error;
pub mod metrics;

pub use config::AggregatorConfig;
/// Shared result type.
pub use error::{MarqueeError, Result};
pub use metrics::{
    EndpointCategory, ExternalCall, MetricsAggregator, OverallReport, SearchKind,
};
