//! # Edusphere DB
//!
//! PostgreSQL connection pool setup and schema migrations.
//!
//! # Example
//!
//! ```ignore
//! use edusphere_config::DatabaseConfig;
//! use edusphere_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! ```

use edusphere_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Opens a connection pool sized and timed by `config`.
///
/// The pool is cheaply cloneable; create it once at startup and share it through
/// application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
}

/// Applies the migrations embedded from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
