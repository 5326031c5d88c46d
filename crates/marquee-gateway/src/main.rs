//! marquee gateway
//!
//! - Config: `marquee.yaml` (override with `MARQUEE_CONFIG`)
//! - Status endpoint: /status (JSON), /status/reset
//! - Health: /healthz, /readyz
//! - Ctrl-C flips readiness to draining, then shuts down gracefully

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use marquee_gateway::error::GatewayError;
use marquee_gateway::{app_state::AppState, config, router};

const DEFAULT_CONFIG_PATH: &str = "marquee.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "marquee-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), GatewayError> {
    let path = std::env::var("MARQUEE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let cfg = config::load_from_file(&path)?;

    let state = AppState::new(cfg)?;
    let listen = state.cfg().gateway.listen_addr()?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, config = %path, "marquee-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await?;

    tracing::info!("marquee-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    state.set_draining();
    tracing::info!("shutdown requested, draining");
}
