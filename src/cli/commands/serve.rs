use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, warn};

use crate::app::app;
use crate::config::AppConfig;
use crate::database::{schema, Database};
use crate::state::AppState;

pub async fn handle(mut config: AppConfig, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }

    info!("Starting tenant-app in {:?} mode", config.environment);

    // Lazy pool: the process serves liveness and reports readiness while the database is down
    let db = Database::connect_lazy(&config.database).context("database configuration")?;

    if config.database.auto_migrate {
        if let Err(e) = schema::migrate(&db).await {
            warn!("Automatic migration failed, continuing: {}", e);
        }
    }

    let bind_addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.server.host, config.server.port))?;

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Listening on http://{}", bind_addr);

    let state = AppState::new(db.clone(), config);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
