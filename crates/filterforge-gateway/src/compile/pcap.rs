//! pcap-backed filter compiler.
//!
//! Compiles tcpdump-style expressions against a dead capture handle, then
//! copies the instruction list into the owned program model. The native
//! `bpf_program` lives only inside `compile` and is freed by `Drop` on every
//! exit path, including the syntax-error return.

use pcap::{Capture, Linktype};

use filterforge_core::bpf::{Insn, Program};
use filterforge_core::error::{FilterForgeError, Result};
use filterforge_core::LinkLayer;

use super::{CompiledFilter, FilterCompiler};

/// DLT the expression is compiled against for each link layer.
fn linktype(link: LinkLayer) -> Linktype {
    match link {
        LinkLayer::Ipv4 => Linktype::IPV4,
        LinkLayer::Ipv6 => Linktype::IPV6,
        LinkLayer::Eth => Linktype::ETHERNET,
        LinkLayer::Raw => Linktype::RAW,
    }
}

#[derive(Debug, Default)]
pub struct PcapCompiler;

impl PcapCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl FilterCompiler for PcapCompiler {
    fn compile(&self, expression: &str, link: LinkLayer) -> Result<CompiledFilter> {
        let cap = Capture::dead(linktype(link))
            .map_err(|e| FilterForgeError::Internal(format!("open dead capture: {e}")))?;

        // Syntax diagnostics surface verbatim in the response.
        let bpf = cap
            .compile(expression, true)
            .map_err(|e| FilterForgeError::Syntax(e.to_string()))?;

        let program: Program = bpf
            .get_instructions()
            .iter()
            .map(|i| Insn {
                code: i.code,
                jt: i.jt,
                jf: i.jf,
                k: i.k,
            })
            .collect();

        Ok(CompiledFilter {
            expression: expression.to_string(),
            link,
            program,
        })
    }
}
