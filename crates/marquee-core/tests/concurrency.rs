//! Concurrent recording, snapshotting, and reset.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use marquee_core::metrics::SearchKind;
use marquee_core::MetricsAggregator;

const THREADS: u64 = 8;
const PER_THREAD: u64 = 1_000;

#[test]
fn concurrent_records_are_not_lost() {
    let agg = MetricsAggregator::default();

    thread::scope(|s| {
        for t in 0..THREADS {
            let agg = &agg;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    agg.record_request("/movies/:id", i % 4 != 0, Duration::from_millis(i));
                    agg.record_cache_hit();
                    agg.record_search(SearchKind::Movie, &format!("q{t}"), 1, true);
                    agg.record_external_call(
                        "streaming-providers",
                        Duration::from_millis(5),
                        true,
                    )
                    .unwrap();
                }
            });
        }
    });

    let report = agg.snapshot_overall();
    let total = THREADS * PER_THREAD;
    assert_eq!(report.users.total_requests, total);
    assert_eq!(report.system.cache_hits, total);
    assert_eq!(report.search.activity.movie_searches, total);
    assert_eq!(report.api["streaming-providers"].requests, total);
    assert_eq!(report.search.popular_endpoints[0].count, total);
    assert_eq!(report.users.error_rate, 25.0);
}

#[test]
fn snapshots_during_writes_stay_well_formed() {
    let agg = MetricsAggregator::default();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        for _ in 0..4 {
            let agg = &agg;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    agg.record_request("/tv", i % 2 == 0, Duration::from_millis(i % 300));
                    if i % 3 == 0 {
                        agg.record_cache_miss();
                    } else {
                        agg.record_cache_hit();
                    }
                }
            });
        }

        let agg = &agg;
        let done = &done;
        s.spawn(move || {
            while !done.load(Ordering::Relaxed) {
                let r = agg.snapshot_overall();
                assert!(r.users.error_rate.is_finite());
                assert!((0.0..=100.0).contains(&r.users.error_rate));
                assert!((0.0..=100.0).contains(&r.system.cache_hit_rate));
                assert!(r.response_time.min <= r.response_time.p95);
                assert!(r.response_time.p95 <= r.response_time.p99);
                assert!(r.response_time.p99 <= r.response_time.max);
                thread::yield_now();
            }
        });

        // Let the writers finish, then stop the reader.
        thread::sleep(Duration::from_millis(50));
        while agg.snapshot_requests().activity.total_requests < 4 * PER_THREAD {
            thread::yield_now();
        }
        done.store(true, Ordering::Relaxed);
    });
}

#[test]
fn reset_races_with_in_flight_records() {
    let agg = MetricsAggregator::default();

    thread::scope(|s| {
        for _ in 0..4 {
            let agg = &agg;
            s.spawn(move || {
                for _ in 0..PER_THREAD {
                    agg.record_request("/movies", false, Duration::from_millis(1));
                }
            });
        }

        let agg = &agg;
        s.spawn(move || {
            for _ in 0..10 {
                agg.reset();
                let r = agg.snapshot_requests().activity;
                assert!(r.total_requests <= 4 * PER_THREAD);
                // Every recorded request failed, so any consistent state is 0% or 100%.
                assert!(r.error_rate == 0.0 || r.error_rate == 100.0);
                thread::yield_now();
            }
        });
    });

    let r = agg.snapshot_overall();
    assert!(r.users.total_requests <= 4 * PER_THREAD);
    assert_eq!(
        r.search.popular_endpoints.first().map(|e| e.count).unwrap_or(0),
        r.users.total_requests
    );
}
