use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{protected, public};
use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.security);

    let router = Router::new()
        // Public
        .merge(page_routes())
        .merge(health_routes())
        // Protected API
        .merge(api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::pages::dashboard))
        .route(
            "/logout",
            get(public::logout::logout).post(public::logout::logout),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health/ready", get(public::health::ready))
        .route("/api/health/live", get(public::health::live))
}

fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/api/example",
        get(protected::example_list).post(protected::example_create),
    )
}

fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }

    if security.cors_origins.is_empty() || security.cors_origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}
