use axum::{extract::State, response::Redirect};

use crate::state::AppState;

/// POST|GET /logout - hand the session back to the platform
///
/// Sessions are owned by the platform; nothing is invalidated locally.
pub async fn logout(State(state): State<AppState>) -> Redirect {
    let target = state.config.auth.logout_url();
    tracing::debug!("Redirecting to platform logout: {}", target);
    Redirect::to(&target)
}
