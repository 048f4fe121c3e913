use axum::{body::Bytes, extract::State};
use serde::Serialize;

use crate::auth::AuthContext;
use crate::database::models::{ExampleItem, NewExampleItem};
use crate::database::{repository, with_tenant};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ItemList {
    pub items: Vec<ExampleItem>,
}

#[derive(Debug, Serialize)]
pub struct CreatedItem {
    pub item: ExampleItem,
}

/// GET /api/example - list items of the caller's tenant
pub async fn list(State(state): State<AppState>, auth: AuthContext) -> ApiResult<ItemList> {
    let items = with_tenant(&state.db, auth.tenant_id, |tx| {
        Box::pin(repository::list_items(tx))
    })
    .await?;

    Ok(ApiResponse::success(ItemList { items }))
}

/// POST /api/example - create an item owned by the caller's tenant
///
/// Body: `{ "title": string, "description"?: string, "priority"?: integer }`.
/// Any tenant id in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthContext,
    body: Bytes,
) -> ApiResult<CreatedItem> {
    let new_item = NewExampleItem::from_json_bytes(&body)?;

    let item = with_tenant(&state.db, auth.tenant_id, move |tx| {
        Box::pin(async move { repository::insert_item(tx, &new_item).await })
    })
    .await?;

    tracing::info!(tenant_id = %auth.tenant_id, item_id = %item.id, "Created example item");
    Ok(ApiResponse::created(CreatedItem { item }))
}
