//! Shared application state.
//!
//! Everything here is immutable after startup and shared across concurrent
//! requests via `Arc`: the validated config, the filter-compiler handle, and
//! the metrics registry.

use std::sync::Arc;

use crate::compile::pcap::PcapCompiler;
use crate::compile::FilterCompiler;
use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    compiler: Arc<dyn FilterCompiler>,
    metrics: GatewayMetrics,
}

impl AppState {
    /// State with the production pcap compiler.
    pub fn new(cfg: GatewayConfig) -> Self {
        Self::with_compiler(cfg, Arc::new(PcapCompiler::new()))
    }

    /// State with an injected compiler (integration tests).
    pub fn with_compiler(cfg: GatewayConfig, compiler: Arc<dyn FilterCompiler>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                compiler,
                metrics: GatewayMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn compiler(&self) -> &dyn FilterCompiler {
        self.inner.compiler.as_ref()
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
