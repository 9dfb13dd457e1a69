//! Portable opcode projection.

use serde::Serialize;

use super::insn::Insn;
use super::program::Program;

/// One exported opcode tuple: a plain, serialization-ready copy of an
/// instruction with no ownership semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortableOpcode {
    pub code: u16,
    pub jt: u8,
    pub jf: u8,
    pub k: u32,
}

impl From<&Insn> for PortableOpcode {
    fn from(insn: &Insn) -> Self {
        Self {
            code: insn.code,
            jt: insn.jt,
            jf: insn.jf,
            k: insn.k,
        }
    }
}

/// Project a program into its portable opcode list.
///
/// Length- and order-preserving; does not consume or invalidate the source
/// program.
pub fn export(program: &Program) -> Vec<PortableOpcode> {
    program.iter().map(PortableOpcode::from).collect()
}
