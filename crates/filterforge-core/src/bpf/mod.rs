//! Classic-BPF program model (instructions, validation, export).
//!
//! The representation mirrors the kernel's `sock_filter` layout: each
//! instruction is a 16-bit code word plus two 8-bit jump offsets and a 32-bit
//! immediate. Programs are loop-free by construction of the validator: every
//! jump must land strictly forward and the program must end in a RET.

pub mod export;
pub mod insn;
pub mod program;
pub mod validate;

pub use export::{export, PortableOpcode};
pub use insn::{AddrMode, Insn, OpClass, OperandSize, Source};
pub use program::Program;
pub use validate::validate;
