#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use marquee_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
metrics:
  window_capacity: 500
  top_k: 5 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.metrics.window_capacity, 1000);
    assert_eq!(cfg.metrics.top_n, 10);
    assert_eq!(cfg.metrics.services.len(), 3);
    assert!(cfg.metrics.max_tracked_keys.is_none());
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
metrics:
  services: ["tmdb", "omdb"]
  window_capacity: 250
  top_n: 3
  max_tracked_keys: 10000
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.metrics.services, vec!["tmdb", "omdb"]);
    assert_eq!(cfg.metrics.max_tracked_keys, Some(10000));
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_out_of_range_values() {
    for bad in [
        "version: 1\ngateway:\n  listen: \"not-an-addr\"\n",
        "version: 1\nmetrics:\n  window_capacity: 0\n",
        "version: 1\nmetrics:\n  window_capacity: 200000\n",
        "version: 1\nmetrics:\n  top_n: 101\n",
        "version: 1\nmetrics:\n  services: []\n",
        "version: 1\nmetrics:\n  services: [\"tmdb\", \"tmdb\"]\n",
        "version: 1\nmetrics:\n  max_tracked_keys: 0\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "{bad}");
    }
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
