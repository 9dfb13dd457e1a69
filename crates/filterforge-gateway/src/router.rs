//! Axum router wiring.
//!
//! The compile endpoint plus the operational probes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, compile, obs};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/compile", post(compile::handle_compile))
        .route("/healthz", get(obs::healthz))
        .route("/metrics", get(obs::metrics))
        .with_state(state)
}
