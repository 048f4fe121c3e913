pub mod auth;
pub mod response;

pub use auth::{require_auth, resolve_auth, MaybeAuth};
pub use response::{ApiResponse, ApiResult};
