//! Lightweight in-process observability.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format
//!
//! Metrics are stored as atomics and rendered on demand; no exporter crate
//! is involved.

pub mod metrics;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(axum::extract::State(state): axum::extract::State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
        .into_response()
}
