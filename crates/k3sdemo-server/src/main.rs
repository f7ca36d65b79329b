//! k3sdemo status server.
//!
//! - `/`, `/health`, `/ready`, `/metrics` on `0.0.0.0:8000` by default
//! - Optional strict YAML config (`K3SDEMO_CONFIG` or `k3sdemo.yaml`)
//! - Graceful shutdown on SIGINT / SIGTERM

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use k3sdemo_core::error::Result;
use k3sdemo_server::{app_state, config, router, shutdown};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "k3sdemo-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_file(config::config_path())?;
    let state = app_state::AppState::new(cfg);
    let listen = state.cfg().server.listen_addr()?;

    let app = router::build_router(state);

    tracing::info!(%listen, "k3sdemo-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| k3sdemo_core::StatusError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await
        .map_err(|e| k3sdemo_core::StatusError::Internal(format!("server failed: {e}")))?;

    tracing::info!("k3sdemo-server stopped");
    Ok(())
}
