//! `SQLite` implementation of [`TodoRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use quicktodo_app::ports::TodoRepository;
use quicktodo_domain::error::TodoError;
use quicktodo_domain::id::TodoId;
use quicktodo_domain::todo::{Todo, TodoDraft};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Todo`].
struct Wrapper(Todo);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Todo> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let completed: bool = row.try_get("completed")?;

        Ok(Self(Todo {
            id: TodoId::new(id),
            title,
            completed,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO todos (title, completed) VALUES (?, ?) RETURNING id, title, completed";
const SELECT_BY_ID: &str = "SELECT id, title, completed FROM todos WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, title, completed FROM todos ORDER BY id";
const UPDATE: &str =
    "UPDATE todos SET title = ?, completed = ? WHERE id = ? RETURNING id, title, completed";
const DELETE_BY_ID: &str = "DELETE FROM todos WHERE id = ? RETURNING id, title, completed";

/// `SQLite`-backed todo repository.
///
/// Each method runs a single statement; the affected row comes back via
/// `RETURNING` so no follow-up read is needed.
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TodoRepository for SqliteTodoRepository {
    fn create(&self, draft: TodoDraft) -> impl Future<Output = Result<Todo, TodoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&draft.title)
                .bind(draft.completed)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: TodoId,
    ) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Todo>, TodoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: TodoId,
        draft: TodoDraft,
    ) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(&draft.title)
                .bind(draft.completed)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(&self, id: TodoId) -> impl Future<Output = Result<Option<Todo>, TodoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(DELETE_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
