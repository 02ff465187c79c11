//! Database Connection Management
//!
//! Utilities for creating and managing database connections.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use super::config::DatabaseConfig;

/// Create a SQLite connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect(&config.url)
        .await
}
