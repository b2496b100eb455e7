//! tally gateway
//!
//! In-memory named counters over HTTP:
//! - `POST /counters`, `GET /counters/:id`, `GET /counters/:id/inc`,
//!   `DELETE /counters/:id`
//! - `GET /health`, `GET /metrics`
//!
//! Usage: `tally-gateway [config.yaml]` (default `tally.yaml`; built-in
//! defaults when the default file is absent).

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tally_core::error::{Result, TallyError};
use tally_gateway::{app_state::AppState, config, router};

const DEFAULT_CONFIG_PATH: &str = "tally.yaml";

#[tokio::main]
async fn main() {
    let (cfg, source) = match load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("config load failed: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter)))
        .with(fmt::layer())
        .init();

    tracing::info!(%source, "config loaded");

    if let Err(e) = run(cfg).await {
        tracing::error!(error = %e, "tally-gateway failed");
        std::process::exit(1);
    }
}

/// Explicit path from argv, else the default file, else built-in defaults.
fn load_config() -> Result<(config::TallyConfig, String)> {
    if let Some(path) = std::env::args().nth(1) {
        return Ok((config::load_from_file(&path)?, path));
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return Ok((
            config::load_from_file(DEFAULT_CONFIG_PATH)?,
            DEFAULT_CONFIG_PATH.to_string(),
        ));
    }
    Ok((config::TallyConfig::default(), "<defaults>".to_string()))
}

async fn run(cfg: config::TallyConfig) -> Result<()> {
    let listen = cfg.gateway.listen_addr()?;

    let state = AppState::new(cfg);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| TallyError::Internal(format!("bind {listen} failed: {e}")))?;

    tracing::info!(%listen, "tally-gateway starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TallyError::Internal(format!("server failed: {e}")))?;

    tracing::info!("tally-gateway shut down");
    Ok(())
}

async fn shutdown_signal() {
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
}
