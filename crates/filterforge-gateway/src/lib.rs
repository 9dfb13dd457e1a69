//! filterforge gateway library entry.
//!
//! This crate wires the HTTP surface, config, compile orchestration, and the
//! pcap-backed filter compiler into a cohesive service. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod compile;
pub mod config;
pub mod obs;
pub mod router;
