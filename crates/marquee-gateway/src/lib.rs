//! marquee gateway library entry.
//!
//! Thin HTTP host around the metrics aggregator: strict YAML config, shared
//! state, request recording middleware, and the operational endpoints. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
