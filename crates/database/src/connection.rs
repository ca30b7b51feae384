use crate::error::DbError;
use dotenvy::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Establishes a connection pool to the SQLite database.
///
/// This function reads the `DATABASE_URL` from the environment (loading a
/// `.env` file first if one exists), creates a bounded connection pool, and
/// returns it. The pool is the query collaborator every repository is
/// constructed with; nothing else in this crate touches the environment.
pub async fn connect() -> Result<SqlitePool, DbError> {
    // A missing .env file is fine; the variable may come from the real environment.
    dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_e| DbError::ConnectionConfigError("DATABASE_URL must be set.".to_string()))?;

    let options = SqliteConnectOptions::from_str(&database_url)
        .map_err(DbError::ConnectionError)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .map_err(DbError::ConnectionError)?;

    tracing::info!(url = %database_url, "Connected to the reservation database");

    Ok(pool)
}

/// A utility function to run database migrations automatically.
///
/// This is useful for ensuring the database schema is up-to-date when the
/// application starts. The test suite runs it against in-memory pools for
/// the same reason.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
