//! Tenant-scoped transactions.
//!
//! Every read or write of a tenant-owned table goes through [`with_tenant`]. The wrapper opens a
//! transaction, binds the tenant id to the transaction-local `app.current_tenant` setting that
//! the row-level-security policies read, runs the caller's work, and commits. If the work fails
//! the transaction is rolled back and the error is returned unchanged.

use std::fmt;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, Postgres, Transaction};
use tracing::{debug, warn};
use uuid::Uuid;

use super::manager::{Database, DatabaseError};

/// Session setting read by the tenant isolation policy
pub const TENANT_SETTING: &str = "app.current_tenant";

/// Session setting read by the operator bypass policy
pub const BYPASS_SETTING: &str = "app.bypass_rls";

/// Identifier of the tenant that owns a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct TenantId(Uuid);

impl TenantId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for TenantId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Open transaction bound to one tenant.
///
/// Handed to the closure given to [`with_tenant`]; repository functions take it instead of a raw
/// connection so the tenant id they write always comes from here.
pub struct TenantTx {
    tx: Transaction<'static, Postgres>,
    tenant_id: TenantId,
}

impl TenantTx {
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn conn(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }
}

/// Run `work` inside a transaction restricted to `tenant_id`.
///
/// ```ignore
/// let items = with_tenant(&db, auth.tenant_id, |tx| Box::pin(repository::list_items(tx))).await?;
/// ```
pub async fn with_tenant<T, F>(db: &Database, tenant_id: TenantId, work: F) -> Result<T, DatabaseError>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut TenantTx) -> BoxFuture<'c, Result<T, DatabaseError>> + Send,
{
    let mut tx = db.pool().begin().await?;

    sqlx::query("SELECT set_config($1, $2, true)")
        .bind(TENANT_SETTING)
        .bind(tenant_id.to_string())
        .execute(&mut *tx)
        .await?;

    debug!(%tenant_id, "tenant-scoped transaction opened");

    let mut scoped = TenantTx { tx, tenant_id };
    let outcome = work(&mut scoped).await;

    match outcome {
        Ok(value) => {
            scoped.tx.commit().await?;
            debug!(%tenant_id, "tenant-scoped transaction committed");
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = scoped.tx.rollback().await {
                warn!(%tenant_id, "rollback failed after {}: {}", err, rollback_err);
            } else {
                debug!(%tenant_id, "tenant-scoped transaction rolled back: {}", err);
            }
            Err(err)
        }
    }
}

/// Run `work` in a transaction that the bypass policy lets see every tenant's rows.
///
/// Operator tooling only; no HTTP handler calls this.
pub async fn without_rls<T, F>(db: &Database, work: F) -> Result<T, DatabaseError>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T, DatabaseError>> + Send,
{
    let mut tx = db.pool().begin().await?;

    sqlx::query("SELECT set_config($1, 'on', true)")
        .bind(BYPASS_SETTING)
        .execute(&mut *tx)
        .await?;

    warn!("row-level security bypassed for operator transaction");

    let outcome = work(&mut *tx).await;
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("rollback failed after {}: {}", err, rollback_err);
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_id_displays_as_uuid() {
        let raw = Uuid::new_v4();
        let tenant = TenantId::from(raw);
        assert_eq!(tenant.to_string(), raw.to_string());
        assert_eq!(tenant.as_uuid(), raw);
    }

    #[test]
    fn tenant_id_serializes_transparently() {
        let raw = Uuid::new_v4();
        let json = serde_json::to_value(TenantId::new(raw)).unwrap();
        assert_eq!(json, serde_json::Value::String(raw.to_string()));
    }
}
