//! Firewall-rule rendering.
//!
//! A compiled filter becomes one commented-out shell line:
//!
//! ```text
//! # iptables -I INPUT -m bpf --bytecode "4, 48 0 0 0,..." -j DROP -m comment --comment "tcp port 80"
//! ```
//!
//! The bytecode clause is the opcode count followed by one `code jt jf k`
//! tuple per instruction, every clause comma-terminated: the textual format
//! the `xt_bpf` match parses.

use std::fmt::Write;

use crate::bpf::PortableOpcode;
use crate::error::{FilterForgeError, Result};
use crate::link::LinkLayer;

/// Byte budget for the rule comment, before the `"..."` suffix.
const COMMENT_LIMIT: usize = 250;

/// Render an exported program as an `iptables`/`ip6tables` DROP rule.
///
/// `Eth` and `Raw` filters have no insert command and fail with
/// `UnsupportedLinkLayer` rather than producing a rule with an empty command.
pub fn to_firewall_rule(
    expression: &str,
    link: LinkLayer,
    opcodes: &[PortableOpcode],
) -> Result<String> {
    let command = link
        .insert_command()
        .ok_or(FilterForgeError::UnsupportedLinkLayer(link))?;

    let mut clause = String::new();
    let _ = write!(clause, "{}, ", opcodes.len());
    for opcode in opcodes {
        let _ = write!(clause, "{} {} {} {},", opcode.code, opcode.jt, opcode.jf, opcode.k);
    }

    let comment = limit_comment(expression);

    Ok(format!(
        "# {command} -m bpf --bytecode \"{clause}\" -j DROP -m comment --comment \"{comment}\""
    ))
}

/// Bound the original expression for use as a rule comment.
///
/// Leading/trailing whitespace (space, CR, LF, TAB) is trimmed. A trimmed
/// string under 250 bytes is returned unchanged. Longer input keeps the
/// longest prefix of whole code points under 250 bytes (a code point that
/// would cross the budget is dropped, never split) plus a literal `"..."`
/// suffix.
pub fn limit_comment(input: &str) -> String {
    let trimmed = input.trim_matches(|c| matches!(c, ' ' | '\r' | '\n' | '\t'));

    if trimmed.len() < COMMENT_LIMIT {
        return trimmed.to_string();
    }

    let mut out = String::with_capacity(COMMENT_LIMIT + 3);
    for c in trimmed.chars() {
        if out.len() + c.len_utf8() >= COMMENT_LIMIT {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}
