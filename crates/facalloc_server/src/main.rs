//! Faculty course allocation server.
//!
//! Serves the faculty/course CRUD API and the allocation pass over one
//! SQLite database.

use anyhow::{Context, Result};
use facalloc_core::{flush_logging, init_logging};
use facalloc_server::{api, config::Config, state::AppState};
use log::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let result = run().await;
    flush_logging();
    result
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    let log_dir = config.log_dir.to_string_lossy().into_owned();
    init_logging(&config.log_level, &log_dir).context("failed to initialize logging")?;
    info!(
        "event=server_start module=server status=start listen_addr={} database={:?}",
        config.listen_addr, config.database
    );

    let conn = match config.database.open() {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=server_start module=server status=error error={err}");
            return Err(err).context("failed to open database");
        }
    };

    let app = api::create_router(AppState::new(conn));
    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(
                "event=server_listen module=server status=error addr={} error={err}",
                config.listen_addr
            );
            return Err(err).with_context(|| format!("failed to bind {}", config.listen_addr));
        }
    };
    info!(
        "event=server_listen module=server status=ok addr={}",
        config.listen_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=shutdown_signal module=server status=error error={err}");
        std::future::pending::<()>().await;
    }
}
