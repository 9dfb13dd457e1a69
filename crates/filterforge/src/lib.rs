//! Top-level facade crate for filterforge.
//!
//! Re-exports the core model and the gateway library so users can depend on a single crate.

pub mod core {
    pub use filterforge_core::*;
}

pub mod gateway {
    pub use filterforge_gateway::*;
}
