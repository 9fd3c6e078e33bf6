//! tally gateway
//!
//! - GET /health-check, /visit-with-{mutex,atomic,channel}
//! - request id / client ip / tracing / panic recovery per request
//! - graceful shutdown: drain, finish in-flight requests, close the channel counter

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use tally_core::error::{Result, TallyError};
use tally_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    let path = config::config_path();
    let cfg = config::load_or_default(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log.filter))
        .map_err(|e| TallyError::BadRequest(format!("invalid log.filter: {e}")))?;
    fmt().with_env_filter(filter).init();

    let listen = cfg.server.listen_addr()?;
    tracing::info!(config = %path, "config loaded");

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "tally-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| TallyError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(state.clone()))
    .await
    .map_err(|e| TallyError::Internal(format!("server failed: {e}")))?;

    // Every connection is done; the token is back in its slot.
    state.shutdown().await;
    tracing::info!("tally-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
    state.begin_drain();
}
