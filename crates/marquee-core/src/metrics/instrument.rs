//! Explicit timing wrapper for outbound calls.
//!
//! ```ignore
//! let movie = aggregator
//!     .external_call("primary-metadata-provider")?
//!     .run_async(client.fetch_movie(id))
//!     .await;
//! ```

use std::future::Future;
use std::time::{Duration, Instant};

use tracing::{error, warn};

use crate::error::{MarqueeError, Result};

use super::aggregator::MetricsAggregator;

/// A validated, not yet started, measurement of one outbound call.
#[must_use = "an ExternalCall records nothing until `run` or `run_async` is called"]
pub struct ExternalCall<'a> {
    aggregator: &'a MetricsAggregator,
    service: &'a str,
}

impl MetricsAggregator {
    /// Resolve `service` up front so a typo fails before the call is made.
    pub fn external_call<'a>(&'a self, service: &'a str) -> Result<ExternalCall<'a>> {
        if !self.is_registered(service) {
            warn!(service = %service, "external call for unregistered service rejected");
            return Err(MarqueeError::UnknownService(service.to_string()));
        }
        Ok(ExternalCall {
            aggregator: self,
            service,
        })
    }
}

impl ExternalCall<'_> {
    pub fn service(&self) -> &str {
        self.service
    }

    /// Run `op`, record its elapsed time and `is_ok()` outcome, and hand its
    /// result back untouched.
    pub fn run<T, E>(
        self,
        op: impl FnOnce() -> std::result::Result<T, E>,
    ) -> std::result::Result<T, E> {
        let started = Instant::now();
        let out = op();
        self.finish(started.elapsed(), out.is_ok());
        out
    }

    /// Async counterpart of [`run`](Self::run).
    pub async fn run_async<T, E, F>(self, fut: F) -> std::result::Result<T, E>
    where
        F: Future<Output = std::result::Result<T, E>>,
    {
        let started = Instant::now();
        let out = fut.await;
        self.finish(started.elapsed(), out.is_ok());
        out
    }

    fn finish(&self, elapsed: Duration, succeeded: bool) {
        // Registered services never change after construction.
        if let Err(e) = self
            .aggregator
            .record_external_call(self.service, elapsed, succeeded)
        {
            error!(service = %self.service, error = %e, "external call not recorded");
        }
    }
}
