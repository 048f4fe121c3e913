use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::tenant::TenantId;

/// Row count for one tenant, as seen by operator tooling
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TenantItemCount {
    pub tenant_id: TenantId,
    pub items: i64,
}
