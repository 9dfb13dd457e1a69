#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use filterforge_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
acme:
  hostnamez: ["bpf.example.org"] # typo should fail
  contact: "admin@example.org"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("invalid yaml"));
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.gateway.max_expression_bytes, 4096);
    assert!(cfg.acme.is_none());
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9090"
  max_expression_bytes: 1024
acme:
  hostnames: ["bpf.example.org"]
  contact: "admin@example.org"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.gateway.listen, "127.0.0.1:9090");
    assert_eq!(cfg.acme.unwrap().hostnames, vec!["bpf.example.org"]);
}

#[test]
fn rejects_unsupported_version() {
    let bad = "version: 2\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("unsupported config version"));
}

#[test]
fn rejects_out_of_range_expression_limit() {
    let bad = r#"
version: 1
gateway:
  max_expression_bytes: 0
"#;
    config::load_from_str(bad).expect_err("must fail");
}

#[test]
fn rejects_contact_without_at_sign() {
    let bad = r#"
version: 1
acme:
  hostnames: ["bpf.example.org"]
  contact: "not-an-email"
"#;
    config::load_from_str(bad).expect_err("must fail");
}
