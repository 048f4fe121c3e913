use std::convert::Infallible;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::auth::{decode_token, AuthContext};
use crate::config::AuthConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Resolve the caller's identity without failing (page context)
pub fn resolve_auth(headers: &HeaderMap, config: &AuthConfig) -> Option<AuthContext> {
    let token = match extract_token_from_headers(headers, &config.cookie_name) {
        Ok(token) => token,
        Err(reason) => {
            tracing::debug!("No session: {}", reason);
            return None;
        }
    };

    match decode_token(&token, &config.jwt_secret) {
        Ok(claims) => Some(AuthContext::from(claims)),
        Err(e) => {
            tracing::debug!("Session token rejected: {}", e);
            None
        }
    }
}

/// Resolve the caller's identity or fail with 401 (API context)
pub fn require_auth(headers: &HeaderMap, config: &AuthConfig) -> Result<AuthContext, ApiError> {
    resolve_auth(headers, config).ok_or_else(|| ApiError::unauthorized("Authentication required"))
}

/// Extract the session token from the Authorization header, falling back to the session cookie.
///
/// A `Bearer` header takes precedence and must carry a token. Any other scheme (or an unreadable
/// header) is ignored here, so a browser sending an unrelated `Basic` header still authenticates
/// with its session cookie.
pub fn extract_token_from_headers(headers: &HeaderMap, cookie_name: &str) -> Result<String, &'static str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    if let Some(token) = bearer {
        let token = token.trim();
        if token.is_empty() {
            return Err("Empty bearer token");
        }
        return Ok(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| value.trim_matches('"').to_string())
        .ok_or("No session token in Authorization header or cookie")
}

/// Required authentication: handlers taking an `AuthContext` never run for anonymous callers
#[async_trait]
impl FromRequestParts<AppState> for AuthContext {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        require_auth(&parts.headers, &state.config.auth)
    }
}

/// Optional authentication for server-rendered pages
#[derive(Debug, Clone)]
pub struct MaybeAuth(pub Option<AuthContext>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeAuth {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuth(resolve_auth(&parts.headers, &state.config.auth)))
    }
}
