//! filterforge core: classic-BPF program model, validator, exporter, and
//! firewall-rule rendering.
//!
//! This crate defines the instruction/program representation shared by the
//! gateway and any offline tooling, plus the pure pipeline stages that turn a
//! compiled program into an `iptables -m bpf` rule string. It intentionally
//! carries no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `FilterForgeError`/`Result` so a
//! hostile filter expression can never crash the serving process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod bpf;
pub mod error;
pub mod link;
pub mod rule;

/// Shared result type.
pub use error::{FilterForgeError, Result};
pub use link::LinkLayer;
