use axum::{extract::State, response::Html};

use crate::database::{repository, with_tenant};
use crate::error::PageError;
use crate::middleware::MaybeAuth;
use crate::state::AppState;
use crate::views;

/// Rows shown in the dashboard's recent list and counted in its stat cards
pub const RECENT_ITEMS_LIMIT: i64 = 5;

/// GET / - dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    MaybeAuth(auth): MaybeAuth,
) -> Result<Html<String>, PageError> {
    let items = match &auth {
        Some(ctx) => {
            with_tenant(&state.db, ctx.tenant_id, |tx| {
                Box::pin(repository::recent_items(tx, RECENT_ITEMS_LIMIT))
            })
            .await?
        }
        None => Vec::new(),
    };

    Ok(Html(views::dashboard::render(auth.as_ref(), &items)))
}
