use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::Database;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: Database, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
