use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{config::AppConfig, routes::router, state::AppState};

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://localhost/unused".to_string(),
        db_max_connections: 1,
        db_min_idle: 1,
        log_level: "info".to_string(),
    }
}

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn test_router(db: DatabaseConnection) -> Router {
    let state = AppState::new(test_config(), db);
    router(Arc::clone(&state))
}
