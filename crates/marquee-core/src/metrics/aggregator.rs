//! Process-wide usage aggregator.
//!
//! All counter groups live behind one `RwLock`, so every record is a short
//! exclusive mutation and every snapshot reads one consistent state. `reset`
//! swaps in a fresh state under the same write lock; a concurrent snapshot
//! observes either the old state or the new one, never a mix.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::AggregatorConfig;
use crate::error::{MarqueeError, Result};

use super::counters::{
    decayed_average, percentage, CacheCounters, RequestActivity, SearchActivity, ServiceUsage,
};
use super::frequency::FrequencyTable;
use super::kinds::{is_success_status, EndpointCategory, SearchKind};
use super::report::{
    EndpointCount, OverallReport, RequestSnapshot, SearchReport, SearchSnapshot, Summary,
    SystemSnapshot, UsageSnapshot, SUMMARY_TOP_N,
};
use super::window::{ResponseTimeStats, ResponseTimeWindow};

#[derive(Debug)]
struct AggregatorState {
    services: BTreeMap<String, ServiceUsage>,
    search: SearchActivity,
    queries: FrequencyTable,
    requests: RequestActivity,
    /// Shared by plain, auth, and collaboration failures.
    request_errors: u64,
    endpoints: FrequencyTable,
    response_times: ResponseTimeWindow,
    cache: CacheCounters,
}

impl AggregatorState {
    fn new(cfg: &AggregatorConfig) -> Self {
        Self {
            services: cfg
                .services
                .iter()
                .map(|s| (s.clone(), ServiceUsage::default()))
                .collect(),
            search: SearchActivity::default(),
            queries: FrequencyTable::with_max_keys(cfg.max_tracked_keys),
            requests: RequestActivity::default(),
            request_errors: 0,
            endpoints: FrequencyTable::with_max_keys(cfg.max_tracked_keys),
            response_times: ResponseTimeWindow::new(cfg.window_capacity),
            cache: CacheCounters::default(),
        }
    }

    /// Error rate always divides by the current request total, whichever
    /// category produced the error.
    fn recompute_error_rate(&mut self) {
        self.requests.error_rate = percentage(self.request_errors, self.requests.total_requests);
    }

    fn apply_request(&mut self, endpoint: &str, succeeded: bool, millis: u64) {
        self.requests.total_requests += 1;
        self.response_times.push(millis);
        self.endpoints.increment(endpoint);
        if !succeeded {
            self.request_errors += 1;
        }
        self.recompute_error_rate();
    }

    fn apply_auth(&mut self, succeeded: bool) {
        self.requests.auth_requests += 1;
        if !succeeded {
            self.request_errors += 1;
            self.recompute_error_rate();
        }
    }

    fn apply_collaboration(&mut self, succeeded: bool) {
        self.requests.collaboration_requests += 1;
        if !succeeded {
            self.request_errors += 1;
            self.recompute_error_rate();
        }
    }

    fn popular_queries(&self, n: usize) -> Vec<String> {
        self.queries.top(n).into_iter().map(|(q, _)| q).collect()
    }

    fn popular_endpoints(&self, n: usize) -> Vec<EndpointCount> {
        self.endpoints
            .top(n)
            .into_iter()
            .map(|(endpoint, count)| EndpointCount { endpoint, count })
            .collect()
    }

    fn system(&self) -> SystemSnapshot {
        SystemSnapshot {
            memory: None,
            cache_hits: self.cache.hits,
            cache_misses: self.cache.misses,
            cache_hit_rate: self.cache.hit_rate(),
        }
    }
}

/// In-memory telemetry for one process.
///
/// Construct once at startup and share through an `Arc`; every method takes
/// `&self`.
#[derive(Debug)]
pub struct MetricsAggregator {
    cfg: AggregatorConfig,
    state: RwLock<AggregatorState>,
    started_at: Instant,
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::with_valid_config(AggregatorConfig::default())
    }
}

impl MetricsAggregator {
    /// Build an aggregator with all counters zeroed.
    pub fn new(cfg: AggregatorConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::with_valid_config(cfg))
    }

    fn with_valid_config(cfg: AggregatorConfig) -> Self {
        let state = RwLock::new(AggregatorState::new(&cfg));
        Self {
            cfg,
            state,
            started_at: Instant::now(),
        }
    }

    /// Registered external dependency names, in configuration order.
    pub fn services(&self) -> &[String] {
        &self.cfg.services
    }

    pub fn is_registered(&self, service: &str) -> bool {
        self.cfg.services.iter().any(|s| s == service)
    }

    /// Time since construction. Not affected by `reset`.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    // --------------------
    // Recording
    // --------------------

    /// Record one completed outbound call to a registered dependency.
    ///
    /// Successful calls blend `elapsed` into the decayed average; failed
    /// calls only count as errors.
    pub fn record_external_call(
        &self,
        service: &str,
        elapsed: Duration,
        succeeded: bool,
    ) -> Result<()> {
        let now_ms = Utc::now().timestamp_millis();
        let mut state = self.state.write();
        let Some(usage) = state.services.get_mut(service) else {
            warn!(service = %service, "external call for unregistered service rejected");
            return Err(MarqueeError::UnknownService(service.to_string()));
        };

        usage.requests += 1;
        usage.last_used_at_ms = Some(now_ms);
        if succeeded {
            usage.avg_response_time_ms =
                decayed_average(usage.avg_response_time_ms, elapsed.as_millis() as f64);
        } else {
            usage.errors += 1;
        }
        Ok(())
    }

    /// Record one completed search. The query is counted (lowercased) even
    /// when the search failed.
    pub fn record_search(&self, kind: SearchKind, query: &str, results: usize, succeeded: bool) {
        let normalized = query.to_lowercase();
        let mut state = self.state.write();

        match kind {
            SearchKind::Movie => state.search.movie_searches += 1,
            SearchKind::Tv => state.search.tv_searches += 1,
            SearchKind::Multi => state.search.multi_searches += 1,
        }
        state.queries.increment(&normalized);

        if succeeded {
            state.search.avg_results_count =
                decayed_average(state.search.avg_results_count, results as f64);
        } else {
            state.search.search_errors += 1;
        }
    }

    /// Record one completed request against `endpoint`.
    pub fn record_request(&self, endpoint: &str, succeeded: bool, elapsed: Duration) {
        let millis = duration_millis(elapsed);
        self.state.write().apply_request(endpoint, succeeded, millis);
    }

    /// Count an auth request. Does not add to the request total; a failure
    /// raises the shared error count and recomputes the rate against the
    /// existing total.
    pub fn record_auth_request(&self, succeeded: bool) {
        self.state.write().apply_auth(succeeded);
    }

    /// Count a watch-together request. Same error-rate behavior as
    /// [`record_auth_request`](Self::record_auth_request).
    pub fn record_collaboration_request(&self, succeeded: bool) {
        self.state.write().apply_collaboration(succeeded);
    }

    /// Request-layer entry point: derives success from the status code and
    /// applies the category counters for reserved prefixes, all under one lock.
    pub fn record_http_request(&self, endpoint: &str, status: u16, elapsed: Duration) {
        let succeeded = is_success_status(status);
        let millis = duration_millis(elapsed);
        let mut state = self.state.write();

        state.apply_request(endpoint, succeeded, millis);
        match EndpointCategory::classify(endpoint) {
            EndpointCategory::Auth => state.apply_auth(succeeded),
            EndpointCategory::Collaboration => state.apply_collaboration(succeeded),
            EndpointCategory::General => {}
        }
    }

    pub fn record_cache_hit(&self) {
        self.state.write().cache.hits += 1;
    }

    pub fn record_cache_miss(&self) {
        self.state.write().cache.misses += 1;
    }

    /// Restore every counter, table, and the response-time window to zero.
    pub fn reset(&self) {
        let fresh = AggregatorState::new(&self.cfg);
        *self.state.write() = fresh;
        debug!("metrics aggregator reset");
    }

    // --------------------
    // Snapshots
    // --------------------

    pub fn snapshot_usage(&self) -> UsageSnapshot {
        self.state.read().services.clone()
    }

    pub fn snapshot_search(&self) -> SearchSnapshot {
        let state = self.state.read();
        SearchSnapshot {
            activity: state.search.clone(),
            popular_queries: state.popular_queries(self.cfg.top_n),
        }
    }

    pub fn snapshot_requests(&self) -> RequestSnapshot {
        let state = self.state.read();
        RequestSnapshot {
            activity: state.requests.clone(),
            popular_endpoints: state.popular_endpoints(self.cfg.top_n),
        }
    }

    /// Cache figures only; memory is merged by the host.
    pub fn snapshot_system(&self) -> SystemSnapshot {
        self.state.read().system()
    }

    pub fn response_time_stats(&self) -> ResponseTimeStats {
        self.state.read().response_times.stats()
    }

    /// Compose every section under a single read and stamp it with the
    /// current time.
    pub fn snapshot_overall(&self) -> OverallReport {
        let uptime_ms = duration_millis(self.uptime());
        let state = self.state.read();

        let popular_queries = state.popular_queries(self.cfg.top_n);
        let popular_endpoints = state.popular_endpoints(self.cfg.top_n);
        let system = state.system();

        let summary = Summary {
            total_requests: state.requests.total_requests,
            error_rate: state.requests.error_rate,
            cache_hit_rate: system.cache_hit_rate,
            top_endpoints: popular_endpoints.iter().take(SUMMARY_TOP_N).cloned().collect(),
            top_queries: popular_queries.iter().take(SUMMARY_TOP_N).cloned().collect(),
        };

        OverallReport {
            timestamp: Utc::now(),
            uptime_ms,
            response_time: state.response_times.stats(),
            api: state.services.clone(),
            search: SearchReport {
                activity: state.search.clone(),
                popular_queries,
                popular_endpoints,
            },
            users: state.requests.clone(),
            system,
            summary,
        }
    }
}

fn duration_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
