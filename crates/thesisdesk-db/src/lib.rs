//! # ThesisDesk DB
//!
//! PostgreSQL connection pool initialization using SQLx.
//!
//! The pool is created once at startup and handed to the application state;
//! request handlers acquire and release connections per query rather than
//! holding one for a request's lifetime.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size cap (default 10)
//! - `DATABASE_ACQUIRE_TIMEOUT_SECS`: seconds to wait for a free connection
//!   (default 5)

use std::env;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set or the database cannot be reached.
/// This runs once at startup, before the server accepts traffic.
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    let acquire_timeout = env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(acquire_timeout))
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
