//!
//! # Store Interface
//!
//! The persistence boundary consumed by the access layers. The services never
//! issue queries themselves and never inspect driver error codes; everything
//! they need is expressed here, including the one constraint violation that
//! is a recoverable outcome rather than a fault (`CreateUserOutcome`).

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Todo, TodoList, TodoListWithItems, User};

/// Result of attempting to create a user.
///
/// A duplicate username is the one store-level constraint the access layer is
/// expected to recover from, so it is a tagged outcome here instead of an
/// error the caller would have to pattern-match driver codes out of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created(User),
    UniqueViolation,
}

/// Key-based CRUD over users, todo lists and todo items.
///
/// All methods are single round trips. Infrastructure failures surface as
/// `Err(AppError)` and are not expected to be recovered from locally.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    async fn find_user_by_id(&self, id: i32) -> Result<Option<User>, AppError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Create a user, reporting a username collision as a typed outcome.
    async fn create_user(
        &self,
        username: &str,
        authentication_string: &str,
    ) -> Result<CreateUserOutcome, AppError>;

    /// All lists owned by `owner_id`. Order is store-defined and carries no
    /// meaning.
    async fn find_lists_by_owner(&self, owner_id: i32) -> Result<Vec<TodoList>, AppError>;

    /// Fetch a list together with its items. No ownership filter is applied
    /// here; that is the access layer's job.
    async fn find_list_by_id(&self, id: i32) -> Result<Option<TodoListWithItems>, AppError>;

    async fn create_list(&self, owner_id: i32, title: &str) -> Result<TodoList, AppError>;

    /// Create an item under `list_id`. A dangling `list_id` is a store fault,
    /// not a typed outcome; callers verify ownership first.
    async fn create_item(&self, list_id: i32, description: &str) -> Result<Todo, AppError>;

    /// Conditionally set `done` on the item matching both `todo_id` and
    /// `parent_id = list_id`, in one operation. Returns the matched-row
    /// count.
    async fn update_item_done(
        &self,
        list_id: i32,
        todo_id: i32,
        done: bool,
    ) -> Result<u64, AppError>;
}
