//! Schema bootstrap
//!
//! Create-if-absent only. Existing tables and rows are never touched, so
//! this runs on every startup.

use sqlx::SqlitePool;
use tracing::info;

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            completed BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos (created_at)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_todos_completed_updated_at ON todos (completed, updated_at)",
    )
    .execute(pool)
    .await?;

    info!("database migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_memory_pool;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = create_memory_pool().await.unwrap();

        run_migrations(&pool).await.unwrap();
        sqlx::query(
            "INSERT INTO todos (id, title, created_at, updated_at) VALUES ('a', 'keep me', 't', 't')",
        )
        .execute(&pool)
        .await
        .unwrap();

        run_migrations(&pool).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn completed_defaults_to_false() {
        let pool = create_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        sqlx::query(
            "INSERT INTO todos (id, title, created_at, updated_at) VALUES ('a', 'x', 't', 't')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let (completed,): (bool,) = sqlx::query_as("SELECT completed FROM todos WHERE id = 'a'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(!completed);
    }
}
