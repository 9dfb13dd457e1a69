//! Structural program validation.
//!
//! The constraints are the classic ones: every jump must land strictly
//! forward and inside the program, and the program must terminate with an
//! explicit RET (accept or reject). Validity is a single boolean; the
//! `debug!` events below are the only breadcrumbs for why a program was
//! rejected.

use tracing::debug;

use super::insn::{op, OpClass};
use super::program::Program;

/// Check a program for forward-only jumps and an explicit terminator.
///
/// Conditional jumps must satisfy `i + 1 + jt < len` and `i + 1 + jf < len`;
/// the unconditional `JA` encoding must satisfy `i + 1 + k < len`. Since the
/// offsets are unsigned, any in-range target is strictly forward, so a
/// program that validates is loop-free.
pub fn validate(program: &Program) -> bool {
    let len = program.len();
    if len == 0 {
        debug!("rejecting empty program");
        return false;
    }

    for (i, insn) in program.iter().enumerate() {
        if insn.class() != OpClass::Jmp {
            continue;
        }

        let from = i + 1;
        let in_range = if insn.jump_op() == op::JA {
            // k is an absolute forward offset; guard the add so a huge
            // immediate cannot wrap into range.
            match from.checked_add(insn.k as usize) {
                Some(target) => target < len,
                None => false,
            }
        } else {
            from + (insn.jt as usize) < len && from + (insn.jf as usize) < len
        };

        if !in_range {
            debug!(pos = i, code = insn.code, "jump target out of range");
            return false;
        }
    }

    match program.last() {
        Some(last) if last.class() == OpClass::Ret => true,
        _ => {
            debug!("program does not terminate with RET");
            false
        }
    }
}
