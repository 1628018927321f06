// src/config/db.rs
// DOCUMENTATION: Database connection pool lifecycle
// PURPOSE: Open and close the shared PostgreSQL connection pool

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub(crate) fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        // Maximum concurrent connections
        .max_connections(config.db_max_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
}

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Called once during application startup in main.rs
/// Returns the pool shared by every data operation
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!("Initializing database pool: {}", config.redacted_url());

    let pool = pool_options(config)
        .connect(&config.connection_url())
        .await?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}

/// Close the pool, waiting for checked-out connections to be returned
pub async fn close_db_pool(pool: &PgPool) {
    log::info!("Closing database pool");
    pool.close().await;
    log::info!("Database pool closed");
}
