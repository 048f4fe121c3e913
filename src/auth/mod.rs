use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::database::TenantId;

/// Claims carried by the platform session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub tenant_id: Uuid,
    pub tenant_slug: String,
    pub user_id: Uuid,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(tenant_id: Uuid, tenant_slug: String, user_id: Uuid, role: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            tenant_id,
            tenant_slug,
            user_id,
            role,
            name: None,
            email: None,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }
}

/// Resolved identity of the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub tenant_id: TenantId,
    pub tenant_slug: String,
    pub user_id: Uuid,
    pub role: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            tenant_id: TenantId::new(claims.tenant_id),
            tenant_slug: claims.tenant_slug,
            user_id: claims.user_id,
            role: claims.role,
            name: claims.name,
            email: claims.email,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Signing secret not configured")]
    InvalidSecret,

    #[error("Token generation error: {0}")]
    TokenGeneration(jsonwebtoken::errors::Error),

    #[error("Invalid token: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),
}

/// Sign a session token (development tooling and tests; production tokens come from the platform)
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::new(Algorithm::HS256), claims, &encoding_key).map_err(AuthError::TokenGeneration)
}

/// Verify signature and expiry, returning the claims
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(AuthError::InvalidToken)
}
