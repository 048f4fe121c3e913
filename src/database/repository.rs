use sqlx::PgConnection;

use crate::database::manager::DatabaseError;
use crate::database::models::{ExampleItem, ItemSummary, NewExampleItem, TenantItemCount};
use crate::database::tenant::TenantTx;

// Every tenant-table statement also filters on the transaction's tenant. The RLS policy is the
// authority; the predicate keeps results correct for roles that bypass RLS.

const ITEM_COLUMNS: &str =
    "id, tenant_id, title, description, status, priority, created_at, updated_at";

/// All items of the transaction's tenant, newest first
pub async fn list_items(tx: &mut TenantTx) -> Result<Vec<ExampleItem>, DatabaseError> {
    let tenant_id = tx.tenant_id();
    let sql = format!(
        "SELECT {} FROM example_items WHERE tenant_id = $1 ORDER BY created_at DESC, id",
        ITEM_COLUMNS
    );

    let items = sqlx::query_as::<_, ExampleItem>(&sql)
        .bind(tenant_id)
        .fetch_all(tx.conn())
        .await?;
    Ok(items)
}

/// Newest `limit` items of the transaction's tenant, reduced to what the dashboard shows
pub async fn recent_items(tx: &mut TenantTx, limit: i64) -> Result<Vec<ItemSummary>, DatabaseError> {
    let tenant_id = tx.tenant_id();
    let items = sqlx::query_as::<_, ItemSummary>(
        "SELECT id, title, status FROM example_items
         WHERE tenant_id = $1
         ORDER BY created_at DESC, id
         LIMIT $2",
    )
    .bind(tenant_id)
    .bind(limit.max(0))
    .fetch_all(tx.conn())
    .await?;
    Ok(items)
}

/// Insert an item owned by the transaction's tenant
pub async fn insert_item(tx: &mut TenantTx, item: &NewExampleItem) -> Result<ExampleItem, DatabaseError> {
    let tenant_id = tx.tenant_id();
    let sql = format!(
        "INSERT INTO example_items (tenant_id, title, description, priority)
         VALUES ($1, $2, $3, $4)
         RETURNING {}",
        ITEM_COLUMNS
    );

    let created = sqlx::query_as::<_, ExampleItem>(&sql)
        .bind(tenant_id)
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.priority)
        .fetch_one(tx.conn())
        .await?;
    Ok(created)
}

/// Item counts per tenant. Needs a connection that can see every tenant (see `without_rls`).
pub async fn tenant_item_counts(conn: &mut PgConnection) -> Result<Vec<TenantItemCount>, DatabaseError> {
    let counts = sqlx::query_as::<_, TenantItemCount>(
        "SELECT tenant_id, COUNT(*) AS items FROM example_items
         GROUP BY tenant_id
         ORDER BY items DESC, tenant_id",
    )
    .fetch_all(conn)
    .await?;
    Ok(counts)
}
