#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use cassini_exporter::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
exporter:
  listen: "0.0.0.0:39099"
  pth: "/metrics" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config_uses_defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.exporter.listen, "0.0.0.0:39099");
    assert_eq!(cfg.exporter.path, "/metrics");
    assert_eq!(cfg.decay.interval_ms, 1000);
    assert_eq!(cfg.errors.sink_capacity, 1024);
}

#[test]
fn rejects_wrong_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn validates_ranges_and_addresses() {
    for bad in [
        "version: 1\ndecay: { interval_ms: 10 }\n",
        "version: 1\nerrors: { sink_capacity: 0 }\n",
        "version: 1\nexporter: { listen: \"not-an-addr\" }\n",
        "version: 1\nexporter: { path: \"metrics\" }\n",
        "version: 1\nexporter: { path: \"/healthz\" }\n",
        "version: 1\nexporter: { path: \"/metrics/:node\" }\n",
        "version: 1\nexporter: { path: \"/*rest\" }\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.code().as_str(), "BAD_CONFIG", "{bad}");
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("/nonexistent/cassini.yaml").expect("defaults");
    assert_eq!(cfg.version, 1);
    assert!(config::load_from_file("/nonexistent/cassini.yaml").is_err());
}

#[test]
fn every_accepted_path_builds_a_router() {
    use cassini_exporter::app_state::AppState;
    use cassini_exporter::{router, ErrorSink, Metrics};

    for path in ["/metrics", "/scrape", "/internal/metrics"] {
        let yaml = format!("version: 1\nexporter: {{ path: \"{path}\" }}\n");
        let cfg = config::load_from_str(&yaml).expect("must parse");
        let state = AppState::new(Metrics::new(ErrorSink::detached()));
        let _ = router::build_router(state, &cfg.exporter.path);
    }
}
