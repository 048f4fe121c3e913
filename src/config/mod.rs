use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Platform base URL used when `PLATFORM_URL` is not set
pub const DEFAULT_PLATFORM_URL: &str = "https://madebykav.com";

/// Session cookie written by the hosting platform
pub const DEFAULT_COOKIE_NAME: &str = "platform_session";

const DEVELOPMENT_JWT_SECRET: &str = "dev-secret-change-me";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string; required by every command that touches the database
    #[serde(skip_serializing)]
    pub url: Option<String>,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection
    pub connection_timeout: u64,
    /// Pooled connections behind pgbouncer cannot keep named statements
    pub disable_prepared_statements: bool,
    pub enable_query_logging: bool,
    pub auto_migrate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub cookie_name: String,
    pub platform_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    /// Empty or containing "*" means any origin
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let config = Self::preset(environment).with_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(v) = lookup("APP_HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("APP_PORT").or_else(|| lookup("PORT")) {
            self.server.port = v.parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                reason: format!("'{}' is not a port number", v),
            })?;
        }

        // Database overrides
        if let Some(v) = lookup("DATABASE_URL") {
            if !v.trim().is_empty() {
                self.database.url = Some(v);
            }
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Some(v) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Some(v) = lookup("DATABASE_DISABLE_PREPARED_STATEMENTS") {
            self.database.disable_prepared_statements =
                v.parse().unwrap_or(self.database.disable_prepared_statements);
        }
        if let Some(v) = lookup("DATABASE_ENABLE_QUERY_LOGGING") {
            self.database.enable_query_logging = v.parse().unwrap_or(self.database.enable_query_logging);
        }
        if let Some(v) = lookup("DATABASE_AUTO_MIGRATE") {
            self.database.auto_migrate = v.parse().unwrap_or(self.database.auto_migrate);
        }

        // Auth overrides
        if let Some(v) = lookup("AUTH_JWT_SECRET") {
            self.auth.jwt_secret = v;
        }
        if let Some(v) = lookup("AUTH_COOKIE_NAME") {
            if !v.trim().is_empty() {
                self.auth.cookie_name = v;
            }
        }
        if let Some(v) = lookup("PLATFORM_URL") {
            if !v.trim().is_empty() {
                self.auth.platform_url = v;
            }
        }

        // Security overrides
        if let Some(v) = lookup("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Some(v) = lookup("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::Missing("AUTH_JWT_SECRET"));
        }
        url::Url::parse(&self.auth.platform_url).map_err(|e| ConfigError::Invalid {
            var: "PLATFORM_URL",
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Defaults for an environment, before any variable is applied
    pub fn preset(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Staging => Self::staging(),
            Environment::Production => Self::production(),
        }
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
                connection_timeout: 30,
                disable_prepared_statements: true,
                enable_query_logging: true,
                auto_migrate: true,
            },
            auth: AuthConfig {
                jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
                cookie_name: DEFAULT_COOKIE_NAME.to_string(),
                platform_url: DEFAULT_PLATFORM_URL.to_string(),
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec![],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 20,
                connection_timeout: 10,
                disable_prepared_statements: true,
                enable_query_logging: true,
                auto_migrate: false,
            },
            auth: AuthConfig {
                jwt_secret: String::new(),
                cookie_name: DEFAULT_COOKIE_NAME.to_string(),
                platform_url: DEFAULT_PLATFORM_URL.to_string(),
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.madebykav.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 50,
                connection_timeout: 5,
                disable_prepared_statements: true,
                enable_query_logging: false,
                auto_migrate: false,
            },
            auth: AuthConfig {
                jwt_secret: String::new(),
                cookie_name: DEFAULT_COOKIE_NAME.to_string(),
                platform_url: DEFAULT_PLATFORM_URL.to_string(),
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec![DEFAULT_PLATFORM_URL.to_string()],
            },
        }
    }
}

impl AuthConfig {
    /// `<PLATFORM_URL>/logout`, keeping any path prefix on the platform URL
    pub fn logout_url(&self) -> String {
        match url::Url::parse(&self.platform_url) {
            Ok(mut url) => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push("logout");
                }
                url.set_query(None);
                url.into()
            }
            Err(_) => format!("{}/logout", self.platform_url.trim_end_matches('/')),
        }
    }
}
