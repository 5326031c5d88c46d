//! Shared application state for the marquee gateway.
//!
//! Owns the one `MetricsAggregator` of the process; handlers and middleware
//! reach it through `AppState::metrics`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use marquee_core::error::Result;
use marquee_core::metrics::MemoryUsage;
use marquee_core::MetricsAggregator;

use crate::config::GatewayConfig;
use crate::obs::{MemoryProbe, ProcessMemoryProbe};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<MetricsAggregator>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    probe: Arc<dyn MemoryProbe>,
    draining: AtomicBool,
}

impl AppState {
    /// Build application state with the real process memory probe.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        Self::with_probe(cfg, Arc::new(ProcessMemoryProbe::new()))
    }

    /// Build application state with a caller-supplied memory probe.
    pub fn with_probe(cfg: GatewayConfig, probe: Arc<dyn MemoryProbe>) -> Result<Self> {
        let metrics = Arc::new(MetricsAggregator::new(cfg.metrics.clone())?);
        tracing::debug!(services = ?metrics.services(), "metrics aggregator ready");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                probe,
                draining: AtomicBool::new(false),
            }),
            metrics,
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<MetricsAggregator> {
        Arc::clone(&self.metrics)
    }

    pub fn memory(&self) -> Option<MemoryUsage> {
        self.inner.probe.sample()
    }

    /// Mark draining state.
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    /// Return whether draining is active.
    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
