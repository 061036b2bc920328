//! PostgreSQL-backed store.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id SERIAL PRIMARY KEY,
//!     username TEXT NOT NULL UNIQUE,
//!     authentication_string TEXT NOT NULL
//! );
//! CREATE TABLE todo_lists (
//!     id SERIAL PRIMARY KEY,
//!     owner_id INTEGER NOT NULL REFERENCES users(id),
//!     title TEXT NOT NULL
//! );
//! CREATE TABLE todos (
//!     id SERIAL PRIMARY KEY,
//!     parent_id INTEGER NOT NULL REFERENCES todo_lists(id) ON DELETE CASCADE,
//!     description TEXT NOT NULL,
//!     done BOOLEAN NOT NULL DEFAULT FALSE
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{Todo, TodoList, TodoListWithItems, User};
use crate::store::{CreateUserOutcome, Store};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, authentication_string FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, authentication_string FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_user(
        &self,
        username: &str,
        authentication_string: &str,
    ) -> Result<CreateUserOutcome, AppError> {
        let result = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, authentication_string) VALUES ($1, $2) \
             RETURNING id, username, authentication_string",
        )
        .bind(username)
        .bind(authentication_string)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(CreateUserOutcome::Created(user)),
            // The username unique constraint is the one violation callers
            // recover from; everything else propagates as a fault.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Ok(CreateUserOutcome::UniqueViolation)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_lists_by_owner(&self, owner_id: i32) -> Result<Vec<TodoList>, AppError> {
        let lists = sqlx::query_as::<_, TodoList>(
            "SELECT id, owner_id, title FROM todo_lists WHERE owner_id = $1 ORDER BY id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(lists)
    }

    async fn find_list_by_id(&self, id: i32) -> Result<Option<TodoListWithItems>, AppError> {
        let list = sqlx::query_as::<_, TodoList>(
            "SELECT id, owner_id, title FROM todo_lists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(list) = list else {
            return Ok(None);
        };

        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, parent_id, description, done FROM todos WHERE parent_id = $1 ORDER BY id",
        )
        .bind(list.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(TodoListWithItems { list, todos }))
    }

    async fn create_list(&self, owner_id: i32, title: &str) -> Result<TodoList, AppError> {
        let list = sqlx::query_as::<_, TodoList>(
            "INSERT INTO todo_lists (owner_id, title) VALUES ($1, $2) \
             RETURNING id, owner_id, title",
        )
        .bind(owner_id)
        .bind(title)
        .fetch_one(&self.pool)
        .await?;
        Ok(list)
    }

    async fn create_item(&self, list_id: i32, description: &str) -> Result<Todo, AppError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (parent_id, description, done) VALUES ($1, $2, FALSE) \
             RETURNING id, parent_id, description, done",
        )
        .bind(list_id)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(todo)
    }

    async fn update_item_done(
        &self,
        list_id: i32,
        todo_id: i32,
        done: bool,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE todos SET done = $1 WHERE id = $2 AND parent_id = $3")
            .bind(done)
            .bind(todo_id)
            .bind(list_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
