//! Orchestration and handler tests with stub compilers (no libpcap involved).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::{extract::State, Form, Json};

use filterforge_core::bpf::insn::op;
use filterforge_core::bpf::{Insn, Program};
use filterforge_core::error::{FilterForgeError, Result};
use filterforge_core::LinkLayer;

use filterforge_gateway::app_state::AppState;
use filterforge_gateway::compile::{
    compile_request, handle_compile, CompileRequest, CompileResponse, CompiledFilter,
    FilterCompiler,
};
use filterforge_gateway::config;

/// Returns the same instruction list for every expression.
struct FixedCompiler {
    insns: Vec<Insn>,
}

impl FilterCompiler for FixedCompiler {
    fn compile(&self, expression: &str, link: LinkLayer) -> Result<CompiledFilter> {
        Ok(CompiledFilter {
            expression: expression.to_string(),
            link,
            program: Program::from(self.insns.clone()),
        })
    }
}

/// Rejects every expression the way libpcap would.
struct FailingCompiler;

impl FilterCompiler for FailingCompiler {
    fn compile(&self, _expression: &str, _link: LinkLayer) -> Result<CompiledFilter> {
        Err(FilterForgeError::Syntax(
            "syntax error in filter expression".to_string(),
        ))
    }
}

fn accept_all() -> FixedCompiler {
    FixedCompiler {
        insns: vec![Insn::stmt(op::RET | op::K, 65535)],
    }
}

#[test]
fn success_renders_iptables_rule() {
    let out = compile_request(&accept_all(), "tcp port 80", "ipv4").unwrap();

    assert_eq!(out.opcodes.len(), 1);
    assert!(out
        .iptables
        .starts_with("# iptables -I INPUT -m bpf --bytecode \"1, "));
    assert!(out.iptables.ends_with("--comment \"tcp port 80\""));
}

#[test]
fn ipv6_selects_ip6tables() {
    let out = compile_request(&accept_all(), "udp", "ipv6").unwrap();
    assert!(out.iptables.starts_with("# ip6tables -I INPUT"));
}

#[test]
fn unrecognized_link_defaults_to_ipv4() {
    let out = compile_request(&accept_all(), "tcp", "token-ring").unwrap();
    assert!(out.iptables.starts_with("# iptables -I INPUT"));

    let out = compile_request(&accept_all(), "tcp", "").unwrap();
    assert!(out.iptables.starts_with("# iptables -I INPUT"));
}

#[test]
fn syntax_error_propagates_verbatim() {
    let err = compile_request(&FailingCompiler, "this is not a filter", "ipv4").unwrap_err();
    assert_eq!(err.to_string(), "syntax error in filter expression");
}

#[test]
fn unterminated_program_fails_the_request() {
    // Validation is enforced, not advisory: a compiler emitting a program
    // without a RET terminator is a request-level error.
    let compiler = FixedCompiler {
        insns: vec![Insn::stmt(op::LD | op::B | op::ABS, 9)],
    };
    let err = compile_request(&compiler, "tcp", "ipv4").unwrap_err();
    assert!(matches!(err, FilterForgeError::InvalidProgram(_)));
}

#[test]
fn out_of_range_jump_fails_the_request() {
    let compiler = FixedCompiler {
        insns: vec![
            Insn::jump(op::JMP | op::JEQ | op::K, 0, 5, 6),
            Insn::stmt(op::RET | op::K, 0),
        ],
    };
    let err = compile_request(&compiler, "tcp", "ipv4").unwrap_err();
    assert!(matches!(err, FilterForgeError::InvalidProgram(_)));
}

#[test]
fn eth_link_has_no_rule_command() {
    let err = compile_request(&accept_all(), "arp", "eth").unwrap_err();
    assert!(matches!(
        err,
        FilterForgeError::UnsupportedLinkLayer(LinkLayer::Eth)
    ));
}

#[tokio::test]
async fn handler_returns_rule_and_records_metrics() {
    let cfg = config::load_from_str("version: 1").unwrap();
    let state = AppState::with_compiler(cfg, Arc::new(accept_all()));

    let Json(resp) = handle_compile(
        State(state.clone()),
        Form(CompileRequest {
            target: "tcp port 80".into(),
            link: "ipv4".into(),
        }),
    )
    .await;

    assert!(resp.iptables.starts_with("# iptables -I INPUT"));
    assert!(resp.error.is_empty());
    assert!(resp.disasm.is_empty());

    let rendered = state.metrics().render();
    assert!(rendered.contains("filterforge_compile_requests_total"));
    assert!(rendered.contains("outcome=\"ok\""));
}

#[tokio::test]
async fn handler_fills_error_field_on_failure() {
    let cfg = config::load_from_str("version: 1").unwrap();
    let state = AppState::with_compiler(cfg, Arc::new(FailingCompiler));

    let Json(resp) = handle_compile(
        State(state),
        Form(CompileRequest {
            target: "this is not a filter".into(),
            link: "ipv4".into(),
        }),
    )
    .await;

    assert!(resp.iptables.is_empty());
    assert_eq!(resp.error, "syntax error in filter expression");
}

#[tokio::test]
async fn handler_rejects_oversized_expression_before_compiling() {
    let cfg = config::load_from_str(
        "version: 1\ngateway:\n  max_expression_bytes: 8\n",
    )
    .unwrap();
    // A compiler call would succeed; the length guard must fire first.
    let state = AppState::with_compiler(cfg, Arc::new(accept_all()));

    let Json(resp) = handle_compile(
        State(state),
        Form(CompileRequest {
            target: "tcp port 80 or udp port 53".into(),
            link: "ipv4".into(),
        }),
    )
    .await;

    assert!(resp.iptables.is_empty());
    assert!(resp.error.contains("exceeds 8 bytes"));
}

#[test]
fn response_envelope_uses_reserved_field_names() {
    let resp = CompileResponse {
        iptables: "# iptables ...".to_string(),
        error: String::new(),
        disasm: String::new(),
    };
    let v = serde_json::to_value(&resp).unwrap();

    assert_eq!(v["Iptables"], "# iptables ...");
    assert_eq!(v["Error"], "");
    // reserved field, always present and empty
    assert_eq!(v["Disasm"], "");
}
