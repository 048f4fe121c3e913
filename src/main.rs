use clap::Parser;
use tracing_subscriber::EnvFilter;

use tenant_app::cli::{self, Cli};
use tenant_app::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, AUTH_JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tenant_app=debug")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    cli::run(cli, config).await
}
