//! Top-level facade crate for marquee.
//!
//! Re-exports the aggregator core and the status gateway so users can depend on a single crate.

pub mod core {
    pub use marquee_core::*;
}

pub mod gateway {
    pub use marquee_gateway::*;
}
