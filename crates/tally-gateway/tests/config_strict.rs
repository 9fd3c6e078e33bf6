#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  read_timeout_ms: 10000 # not a server field
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.request_timeout_ms, 10_000);
    assert_eq!(cfg.server.max_header_bytes, 1 << 20);
    assert_eq!(cfg.log.filter, "info");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9090"
  request_timeout_ms: 2500
  max_header_bytes: 8192
log:
  filter: "debug"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9090);
    assert_eq!(cfg.server.request_timeout().as_millis(), 2500);
    assert_eq!(cfg.server.max_header_bytes, 8192);
    assert_eq!(cfg.log.filter, "debug");
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_out_of_range_values() {
    for bad in [
        "version: 1\nserver:\n  listen: \"not-an-addr\"\n",
        "version: 1\nserver:\n  request_timeout_ms: 5\n",
        "version: 1\nserver:\n  max_header_bytes: 10\n",
        "version: 1\nlog:\n  filter: \"  \"\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "{bad}");
    }
}

#[test]
fn missing_file_means_defaults() {
    let cfg = config::load_or_default("/nonexistent/tally.yaml").expect("defaults");
    assert_eq!(cfg.version, 1);
    assert!(config::load_from_file("/nonexistent/tally.yaml").is_err());
}
