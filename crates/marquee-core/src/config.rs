//! Aggregator configuration.
//!
//! Deserializable so hosts can embed it directly in their own config files.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{MarqueeError, Result};

/// External dependencies tracked when no explicit list is configured.
pub const DEFAULT_SERVICES: [&str; 3] = [
    "primary-metadata-provider",
    "secondary-metadata-provider",
    "streaming-providers",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregatorConfig {
    /// Registered external dependency names. Recording against any other name fails.
    #[serde(default = "default_services")]
    pub services: Vec<String>,

    /// Number of most recent response-time samples kept for distribution stats.
    #[serde(default = "default_window_capacity")]
    pub window_capacity: usize,

    /// Length of the popular query / endpoint rankings.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Upper bound on distinct keys per frequency table. `None` keeps every key.
    #[serde(default)]
    pub max_tracked_keys: Option<usize>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            services: default_services(),
            window_capacity: default_window_capacity(),
            top_n: default_top_n(),
            max_tracked_keys: None,
        }
    }
}

impl AggregatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.services.is_empty() {
            return Err(MarqueeError::BadRequest("services must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for svc in &self.services {
            if svc.trim().is_empty() {
                return Err(MarqueeError::BadRequest("service names must not be blank".into()));
            }
            if !seen.insert(svc.as_str()) {
                return Err(MarqueeError::BadRequest(format!("duplicate service: {svc}")));
            }
        }
        if self.window_capacity == 0 {
            return Err(MarqueeError::BadRequest("window_capacity must be positive".into()));
        }
        if self.top_n == 0 {
            return Err(MarqueeError::BadRequest("top_n must be positive".into()));
        }
        if self.max_tracked_keys == Some(0) {
            return Err(MarqueeError::BadRequest(
                "max_tracked_keys must be positive when set".into(),
            ));
        }
        Ok(())
    }
}

fn default_services() -> Vec<String> {
    DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect()
}
fn default_window_capacity() -> usize {
    1000
}
fn default_top_n() -> usize {
    10
}
