use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::services::broadcast::{Broadcaster, WsBroadcaster};
use crate::state::security_config::SecurityConfig;
use crate::ws::hub::WsRegistry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Security configuration (admin token)
    pub security: SecurityConfig,
    /// Connected-viewer registry for the WebSocket fan-out
    ws_registry: Arc<WsRegistry>,
    /// Fire-and-forget event publisher injected into services
    broadcaster: Arc<dyn Broadcaster>,
}

impl AppState {
    /// Create a new AppState with the given database connection and security
    /// config, broadcasting over an in-process WebSocket registry.
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        let ws_registry = Arc::new(WsRegistry::new());
        let broadcaster: Arc<dyn Broadcaster> =
            Arc::new(WsBroadcaster::new(ws_registry.clone()));
        Self {
            db: Some(db),
            security,
            ws_registry,
            broadcaster,
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db(security: SecurityConfig) -> Self {
        let ws_registry = Arc::new(WsRegistry::new());
        let broadcaster: Arc<dyn Broadcaster> =
            Arc::new(WsBroadcaster::new(ws_registry.clone()));
        Self {
            db: None,
            security,
            ws_registry,
            broadcaster,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Database handle, or a config error when the state was built without
    /// one (routes that reach here are DB-backed by construction).
    pub fn require_db(&self) -> Result<&DatabaseConnection, AppError> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::config("AppState has no database connection".to_string()))
    }

    pub fn ws_registry(&self) -> Arc<WsRegistry> {
        self.ws_registry.clone()
    }

    pub fn broadcaster(&self) -> Arc<dyn Broadcaster> {
        self.broadcaster.clone()
    }

    /// Swap the broadcaster (tests inject a recording one)
    pub fn with_broadcaster(mut self, broadcaster: Arc<dyn Broadcaster>) -> Self {
        self.broadcaster = broadcaster;
        self
    }

    #[cfg(test)]
    pub fn for_tests_without_db() -> Self {
        Self::without_db(SecurityConfig::for_tests())
    }
}
