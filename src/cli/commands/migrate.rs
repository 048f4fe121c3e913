use anyhow::Context;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::{schema, Database};

pub async fn handle(config: AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let db = Database::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    schema::migrate(&db).await.context("migration failed")?;
    db.close().await;

    output_success(
        output_format,
        &format!("Migrated {}", schema::EXAMPLE_ITEMS),
        Some(json!({ "tables": [schema::EXAMPLE_ITEMS] })),
    )
}
