//! tourbot server binary

use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tourbot_server::{create_router, start_sweeper, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var("TOURBOT_CONFIG").ok();
    let settings = tourbot_config::load_settings(config_path.as_deref())
        .context("failed to load settings")?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let session_ttl = Duration::from_secs(settings.engine.session_ttl_secs);
    let sweep_interval = Duration::from_secs(settings.engine.sweep_interval_secs);

    let state = AppState::new(settings);
    let sweeper_shutdown = start_sweeper(state.engine.clone(), session_ttl, sweep_interval);

    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "tourbot server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await
        .context("server error")?;

    let _ = sweeper_shutdown.send(true);
    Ok(())
}
