//! Binary entrypoint for the lockrelay HTTP server.
//!
//! Configuration is read from `LOCKRELAY_*` environment variables (see
//! [`lockrelay_server::config`]); log filtering follows `RUST_LOG`.

use tracing_subscriber::EnvFilter;

use lockrelay_server::config::ServerConfig;
use lockrelay_server::error::StartupError;
use lockrelay_server::router::build_router;
use lockrelay_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "lockrelay server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        %addr,
        initial_status = %config.initial_status,
        "lockrelay server starting"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("lockrelay server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
