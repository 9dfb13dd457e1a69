//! Compile-request orchestration.
//!
//! One request flows through fixed stages on a single logical thread of
//! control: map the link name, invoke the filter-compiler collaborator,
//! validate the program, export it, render the firewall rule. Nothing
//! survives across requests and no retry is attempted.

pub mod pcap;

use std::time::Instant;

use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};

use filterforge_core::bpf::{export, validate, PortableOpcode, Program};
use filterforge_core::error::{FilterForgeError, Result};
use filterforge_core::{rule, LinkLayer};

use crate::app_state::AppState;

/// Output of the external filter-compiler collaborator.
///
/// The collaborator owns whatever native resources compilation needed; by
/// the time a `CompiledFilter` exists, the program has been copied into the
/// owned model and the native buffer is already released.
#[derive(Debug)]
pub struct CompiledFilter {
    pub expression: String,
    pub link: LinkLayer,
    pub program: Program,
}

/// Seam to the external filter-compiler capability.
///
/// Implementations must surface expression syntax errors as
/// `FilterForgeError::Syntax` with the compiler's message verbatim.
pub trait FilterCompiler: Send + Sync {
    fn compile(&self, expression: &str, link: LinkLayer) -> Result<CompiledFilter>;
}

/// Successful compile result: the exported opcode list and the rendered rule.
#[derive(Debug)]
pub struct CompileOutcome {
    pub opcodes: Vec<PortableOpcode>,
    pub iptables: String,
}

/// Run one compile request through the full pipeline.
///
/// A program the validator rejects fails the request; the compiler is not
/// trusted to always emit structurally sound output.
pub fn compile_request(
    compiler: &dyn FilterCompiler,
    expression: &str,
    link_name: &str,
) -> Result<CompileOutcome> {
    let link = LinkLayer::from_name(link_name);

    let compiled = compiler.compile(expression, link)?;

    if !validate(&compiled.program) {
        return Err(FilterForgeError::InvalidProgram(format!(
            "compiler emitted a non-forward or unterminated program ({} instructions)",
            compiled.program.len()
        )));
    }

    let opcodes = export(&compiled.program);
    debug_assert_eq!(opcodes.len(), compiled.program.len());

    let iptables = rule::to_firewall_rule(&compiled.expression, compiled.link, &opcodes)?;

    tracing::info!(
        expression = %compiled.expression,
        link = %compiled.link,
        opcodes = opcodes.len(),
        "compiled filter"
    );

    Ok(CompileOutcome { opcodes, iptables })
}

// --------------------
// HTTP surface
// --------------------

#[derive(Debug, Deserialize)]
pub struct CompileRequest {
    /// Filter expression.
    pub target: String,
    /// Link-layer name (`ipv4|ipv6|eth|raw`); anything else maps to ipv4.
    #[serde(default)]
    pub link: String,
}

/// Response envelope. `Disasm` is reserved and always empty.
#[derive(Debug, Default, Serialize)]
pub struct CompileResponse {
    #[serde(rename = "Iptables")]
    pub iptables: String,
    #[serde(rename = "Error")]
    pub error: String,
    #[serde(rename = "Disasm")]
    pub disasm: String,
}

/// `POST /compile` handler. Failures are carried in the envelope's `Error`
/// field; the HTTP status stays 200.
pub async fn handle_compile(
    State(app): State<AppState>,
    Form(req): Form<CompileRequest>,
) -> Json<CompileResponse> {
    let started = Instant::now();
    let mut resp = CompileResponse::default();

    let limit = app.cfg().gateway.max_expression_bytes;
    let result = if req.target.len() > limit {
        Err(FilterForgeError::BadRequest(format!(
            "expression exceeds {limit} bytes"
        )))
    } else {
        compile_request(app.compiler(), &req.target, &req.link)
    };

    let outcome_label = match result {
        Ok(outcome) => {
            resp.iptables = outcome.iptables;
            "ok"
        }
        Err(e) => {
            tracing::warn!(error = %e, "compile rejected");
            resp.error = e.to_string();
            "error"
        }
    };

    app.metrics()
        .compile_requests
        .inc(&[("outcome", outcome_label)]);
    app.metrics()
        .compile_duration
        .observe(&[], started.elapsed());

    Json(resp)
}
