//! Distribution statistics and frequency table behavior.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use marquee_core::metrics::{FrequencyTable, ResponseTimeStats, ResponseTimeWindow};

#[test]
fn empty_window_reports_zeros() {
    let w = ResponseTimeWindow::new(1000);
    assert!(w.is_empty());
    assert_eq!(w.stats(), ResponseTimeStats::default());
}

#[test]
fn single_sample_percentiles_stay_in_bounds() {
    let mut w = ResponseTimeWindow::new(1000);
    w.push(42);
    let s = w.stats();
    assert_eq!(
        s,
        ResponseTimeStats {
            avg: 42,
            min: 42,
            max: 42,
            p95: 42,
            p99: 42,
        }
    );
}

#[test]
fn nearest_rank_without_interpolation() {
    let mut w = ResponseTimeWindow::new(1000);
    // Arrival order must not matter.
    for v in (1..=100).rev() {
        w.push(v);
    }
    let s = w.stats();
    assert_eq!(s.min, 1);
    assert_eq!(s.max, 100);
    // floor(100 * 0.95) = 95 -> sorted[95] = 96
    assert_eq!(s.p95, 96);
    // floor(100 * 0.99) = 99 -> sorted[99] = 100
    assert_eq!(s.p99, 100);
}

#[test]
fn small_windows_use_last_element() {
    let mut w = ResponseTimeWindow::new(1000);
    for v in 1..=20 {
        w.push(v);
    }
    let s = w.stats();
    assert_eq!(s.p95, 20);
    assert_eq!(s.p99, 20);
}

#[test]
fn average_rounds_to_nearest() {
    let mut w = ResponseTimeWindow::new(10);
    w.push(1);
    w.push(2);
    assert_eq!(w.stats().avg, 2);

    w.push(2);
    // 5 / 3 = 1.67
    assert_eq!(w.stats().avg, 2);

    w.push(0);
    // 5 / 4 = 1.25
    assert_eq!(w.stats().avg, 1);
}

#[test]
fn window_evicts_oldest_first() {
    let mut w = ResponseTimeWindow::new(3);
    for v in [900, 1, 2, 3] {
        w.push(v);
    }
    assert_eq!(w.len(), 3);
    assert_eq!(w.capacity(), 3);
    assert_eq!(w.stats().max, 3);

    w.clear();
    assert!(w.is_empty());
}

#[test]
fn frequency_ranks_count_then_first_seen() {
    let mut t = FrequencyTable::new();
    for k in ["b", "a", "c", "a", "b", "d"] {
        t.increment(k);
    }
    assert_eq!(t.count("a"), 2);
    assert_eq!(t.count("missing"), 0);
    assert_eq!(
        t.top(10),
        vec![
            ("b".to_string(), 2),
            ("a".to_string(), 2),
            ("c".to_string(), 1),
            ("d".to_string(), 1),
        ]
    );
    assert_eq!(t.top(1).len(), 1);
}

#[test]
fn frequency_clear_restarts_first_seen_order() {
    let mut t = FrequencyTable::new();
    t.increment("old");
    t.clear();
    assert!(t.is_empty());

    t.increment("new");
    t.increment("old");
    assert_eq!(t.top(2)[0].0, "new");
}

#[test]
fn bounded_table_evicts_least_frequent() {
    let mut t = FrequencyTable::with_max_keys(Some(2));
    t.increment("popular");
    t.increment("popular");
    t.increment("once");
    t.increment("also-once");

    assert_eq!(t.len(), 2);
    assert_eq!(t.count("popular"), 2);
    assert_eq!(t.count("once"), 0);
    assert_eq!(t.count("also-once"), 1);
}

#[test]
fn bounded_table_does_not_evict_on_existing_key() {
    let mut t = FrequencyTable::with_max_keys(Some(2));
    t.increment("a");
    t.increment("b");
    assert_eq!(t.increment("a"), 2);
    assert_eq!(t.len(), 2);
    assert_eq!(t.count("b"), 1);
}

#[test]
fn partial_top_matches_full_ranking() {
    let mut t = FrequencyTable::new();
    // 500 keys; key i occurs (i % 7) + 1 times, so many counts tie.
    for i in 0..500u64 {
        for _ in 0..=(i % 7) {
            t.increment(&format!("k{i}"));
        }
    }

    let full = t.top(usize::MAX);
    assert_eq!(full.len(), 500);
    for n in [0, 1, 3, 10, 71, 499, 500] {
        assert_eq!(t.top(n), full[..n].to_vec(), "n = {n}");
    }

    // Highest count is 7; among those, first-seen order wins.
    assert_eq!(full[0], ("k6".to_string(), 7));
    assert_eq!(full[1], ("k13".to_string(), 7));
}
