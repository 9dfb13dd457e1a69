//! filterforge gateway
//!
//! - Compile endpoint: POST /compile (form fields `target`, `link`)
//! - Tracing via RUST_LOG
//! - Strict YAML config, validated before the listener binds

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use filterforge_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("filterforge.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "filterforge-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
