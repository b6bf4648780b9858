//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. Every repository
//! call checks a connection out of the pool and returns it on drop.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open (creating if missing) the SQLite database at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("todos.db")).await?;
/// ```
pub async fn create_pool(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    create_pool_with_options(options, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a pool with custom connect options.
///
/// # Arguments
///
/// * `options` - SQLite connect options
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    options: SqliteConnectOptions,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create a private in-memory database.
///
/// Each SQLite connection to `:memory:` gets its own database, so the pool
/// is pinned to a single connection that never expires.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pool_acquires_connection() {
        let pool = create_memory_pool().await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn creates_missing_database_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("todos.db");
        assert!(!path.exists());

        let pool = create_pool(&path).await.expect("pool creation failed");
        pool.close().await;

        assert!(path.exists());
    }

    #[tokio::test]
    async fn unwritable_location_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing-dir").join("todos.db");

        assert!(create_pool(&path).await.is_err());
    }

    #[tokio::test]
    async fn concurrent_pool_access() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = create_pool(&dir.path().join("todos.db"))
            .await
            .expect("pool creation failed");

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i64,) = sqlx::query_as("SELECT ?")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i64);
        }
    }
}
