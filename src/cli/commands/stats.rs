use anyhow::Context;
use serde_json::json;

use crate::cli::utils::{output_empty_collection, output_table};
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::{repository, without_rls, Database};

pub async fn handle(config: AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let db = Database::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    let counts = without_rls(&db, |conn| Box::pin(repository::tenant_item_counts(conn)))
        .await
        .context("failed to count items")?;
    db.close().await;

    if counts.is_empty() {
        return output_empty_collection(output_format, "tenants", "No items stored yet");
    }

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "tenants": counts }))?);
            Ok(())
        }
        OutputFormat::Text => {
            let rows: Vec<Vec<String>> = counts
                .iter()
                .map(|c| vec![c.tenant_id.to_string(), c.items.to_string()])
                .collect();
            output_table(&["TENANT", "ITEMS"], &rows);
            Ok(())
        }
    }
}
