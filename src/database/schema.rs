//! Table definitions and row-level-security policies.
//!
//! DDL is idempotent so `migrate` can run on every start.

use tracing::info;

use super::manager::{Database, DatabaseError};
use super::tenant::{BYPASS_SETTING, TENANT_SETTING};

pub const EXAMPLE_ITEMS: &str = "example_items";

/// Tenant isolation policy for a table keyed by `tenant_column`.
///
/// Rows are visible and writable only when `tenant_column` matches the transaction's
/// `app.current_tenant`. An unset or empty setting matches nothing.
pub fn tenant_policy(table: &str, tenant_column: &str) -> Vec<String> {
    let policy = format!("{}_tenant_isolation", table);
    let predicate = format!(
        "{} = NULLIF(current_setting('{}', true), '')::uuid",
        quote_identifier(tenant_column),
        TENANT_SETTING
    );

    vec![
        format!("ALTER TABLE {} ENABLE ROW LEVEL SECURITY", quote_identifier(table)),
        // Owners are subject to policies too
        format!("ALTER TABLE {} FORCE ROW LEVEL SECURITY", quote_identifier(table)),
        format!(
            "DROP POLICY IF EXISTS {} ON {}",
            quote_identifier(&policy),
            quote_identifier(table)
        ),
        format!(
            "CREATE POLICY {} ON {} USING ({}) WITH CHECK ({})",
            quote_identifier(&policy),
            quote_identifier(table),
            predicate,
            predicate
        ),
    ]
}

/// Permissive policy honoured only inside `without_rls` transactions
pub fn bypass_policy(table: &str) -> Vec<String> {
    let policy = format!("{}_bypass_rls", table);
    vec![
        format!(
            "DROP POLICY IF EXISTS {} ON {}",
            quote_identifier(&policy),
            quote_identifier(table)
        ),
        format!(
            "CREATE POLICY {} ON {} USING (current_setting('{}', true) = 'on')",
            quote_identifier(&policy),
            quote_identifier(table),
            BYPASS_SETTING
        ),
    ]
}

/// Every statement needed to provision `example_items`, in order
pub fn example_items_ddl() -> Vec<String> {
    let mut statements = vec![
        r#"CREATE TABLE IF NOT EXISTS "example_items" (
    "id" uuid PRIMARY KEY DEFAULT gen_random_uuid(),
    "tenant_id" uuid NOT NULL,
    "title" text NOT NULL,
    "description" text,
    "status" text NOT NULL DEFAULT 'pending',
    "priority" integer NOT NULL DEFAULT 0,
    "created_at" timestamptz NOT NULL DEFAULT now(),
    "updated_at" timestamptz NOT NULL DEFAULT now()
)"#
        .to_string(),
        r#"CREATE INDEX IF NOT EXISTS "example_items_tenant_created_idx"
    ON "example_items" ("tenant_id", "created_at" DESC)"#
            .to_string(),
        r#"CREATE OR REPLACE FUNCTION "touch_updated_at"() RETURNS trigger AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql"#
            .to_string(),
        r#"DROP TRIGGER IF EXISTS "example_items_set_updated_at" ON "example_items""#.to_string(),
        r#"CREATE TRIGGER "example_items_set_updated_at"
    BEFORE UPDATE ON "example_items"
    FOR EACH ROW EXECUTE FUNCTION "touch_updated_at"()"#
            .to_string(),
    ];

    statements.extend(tenant_policy(EXAMPLE_ITEMS, "tenant_id"));
    statements.extend(bypass_policy(EXAMPLE_ITEMS));
    statements
}

/// Apply all DDL in a single transaction
pub async fn migrate(db: &Database) -> Result<(), DatabaseError> {
    let mut tx = db.pool().begin().await?;
    for statement in example_items_ddl() {
        sqlx::query(&statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    info!("Schema migrated: {}", EXAMPLE_ITEMS);
    Ok(())
}

/// Quote SQL identifier to prevent injection
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
