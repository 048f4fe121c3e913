pub mod manager;
pub mod models;
pub mod repository;
pub mod schema;
pub mod tenant;

pub use manager::{Database, DatabaseError};
pub use tenant::{with_tenant, without_rls, TenantId, TenantTx};
