//! Shared error type across filterforge crates.

use thiserror::Error;

use crate::link::LinkLayer;

/// Shared result type.
pub type Result<T> = std::result::Result<T, FilterForgeError>;

/// Unified error type used by core and gateway.
///
/// Every user-visible failure is reported as the `Display` rendering of one
/// of these variants; internal detail such as stack traces or raw library
/// return codes never reaches the caller.
#[derive(Debug, Error)]
pub enum FilterForgeError {
    /// The external filter compiler rejected the expression. The message is
    /// surfaced verbatim, so no prefix is added here.
    #[error("{0}")]
    Syntax(String),
    /// The compiled program failed structural validation (non-forward jump,
    /// out-of-range target, or missing RET terminator).
    #[error("invalid filter program: {0}")]
    InvalidProgram(String),
    /// The link layer has no matching firewall insert command.
    #[error("link layer {0} has no firewall insert command")]
    UnsupportedLinkLayer(LinkLayer),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}
