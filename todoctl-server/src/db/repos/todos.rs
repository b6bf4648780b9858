//! Todo repository
//!
//! Handles todo CRUD with:
//! - server-generated ids and timestamps on insert
//! - transactional partial update (existence check, UPDATE ... RETURNING)
//!   under `BEGIN IMMEDIATE`, so concurrent writers queue on the busy timeout
//! - hard delete detected via rows affected

use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use super::DbError;
use crate::models::{timestamp, NewTodo, TodoChanges};

/// Todo record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Which todos a listing returns, and in what order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFilter {
    /// Everything, newest `created_at` first
    All,
    /// `completed = true`, most recently updated first
    Completed,
    /// `completed = false`, newest `created_at` first
    Pending,
}

impl TodoFilter {
    fn query(self) -> &'static str {
        match self {
            Self::All => {
                r#"
                SELECT id, title, description, completed, created_at, updated_at
                FROM todos
                ORDER BY created_at DESC, rowid DESC
                "#
            }
            Self::Completed => {
                r#"
                SELECT id, title, description, completed, created_at, updated_at
                FROM todos
                WHERE completed = TRUE
                ORDER BY updated_at DESC, rowid DESC
                "#
            }
            Self::Pending => {
                r#"
                SELECT id, title, description, completed, created_at, updated_at
                FROM todos
                WHERE completed = FALSE
                ORDER BY created_at DESC, rowid DESC
                "#
            }
        }
    }
}

fn not_found(id: &str) -> DbError {
    DbError::NotFound {
        resource: "todo",
        id: id.to_owned(),
    }
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new todo. `created_at` and `updated_at` share one timestamp.
    pub async fn create(&self, new: NewTodo) -> Result<Todo, DbError> {
        let id = Uuid::new_v4().to_string();
        let now = timestamp::format(&timestamp::now());

        let mut conn = self.pool.acquire().await?;
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (id, title, description, completed, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, title, description, completed, created_at, updated_at
            "#,
        )
        .bind(&id)
        .bind(new.title.as_str())
        .bind(new.description.as_deref())
        .bind(new.completed)
        .bind(&now)
        .bind(&now)
        .fetch_one(&mut *conn)
        .await?;

        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    /// List todos matching `filter`. An empty table yields an empty vec.
    pub async fn list(&self, filter: TodoFilter) -> Result<Vec<Todo>, DbError> {
        let mut conn = self.pool.acquire().await?;
        let todos = sqlx::query_as::<_, Todo>(filter.query())
            .fetch_all(&mut *conn)
            .await?;

        Ok(todos)
    }

    /// Get a single todo by id.
    pub async fn get(&self, id: &str) -> Result<Todo, DbError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, completed, created_at, updated_at
            FROM todos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Apply a partial update.
    ///
    /// Empty `changes` return the stored row untouched. Otherwise only the
    /// provided columns are written and `updated_at` moves strictly forward.
    ///
    /// Takes the write lock up front; concurrent updates wait on the busy
    /// timeout rather than failing.
    pub async fn update(&self, id: &str, changes: TodoChanges) -> Result<Todo, DbError> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let existing = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, title, description, completed, created_at, updated_at
            FROM todos
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found(id))?;

        if changes.is_empty() {
            return Ok(existing);
        }

        let updated_at = timestamp::next_after(existing.updated_at);

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE todos SET ");
        let mut set = query.separated(", ");
        if let Some(title) = &changes.title {
            set.push("title = ").push_bind_unseparated(title.as_str());
        }
        if let Some(description) = &changes.description {
            set.push("description = ")
                .push_bind_unseparated(description.as_deref());
        }
        if let Some(completed) = changes.completed {
            set.push("completed = ").push_bind_unseparated(completed);
        }
        set.push("updated_at = ")
            .push_bind_unseparated(timestamp::format(&updated_at));

        query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" RETURNING id, title, description, completed, created_at, updated_at");

        let todo = query
            .build_query_as::<Todo>()
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(id = %todo.id, "todo updated");
        Ok(todo)
    }

    /// Permanently delete a todo.
    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(id, "todo deleted");
        Ok(())
    }
}
