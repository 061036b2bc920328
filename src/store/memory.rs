//! In-memory store.
//!
//! Backs the test suites and lets the application run without a database.
//! Ids are assigned from per-table counters starting at 1, mirroring the
//! serial columns of the Postgres schema.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{Todo, TodoList, TodoListWithItems, User};
use crate::store::{CreateUserOutcome, Store};

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    lists: Vec<TodoList>,
    todos: Vec<Todo>,
    next_user_id: i32,
    next_list_id: i32,
    next_todo_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(
        &self,
        username: &str,
        authentication_string: &str,
    ) -> Result<CreateUserOutcome, AppError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.username == username) {
            return Ok(CreateUserOutcome::UniqueViolation);
        }
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: username.to_owned(),
            authentication_string: authentication_string.to_owned(),
        };
        inner.users.push(user.clone());
        Ok(CreateUserOutcome::Created(user))
    }

    async fn find_lists_by_owner(&self, owner_id: i32) -> Result<Vec<TodoList>, AppError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .lists
            .iter()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_list_by_id(&self, id: i32) -> Result<Option<TodoListWithItems>, AppError> {
        let inner = self.inner.lock().unwrap();
        let Some(list) = inner.lists.iter().find(|l| l.id == id).cloned() else {
            return Ok(None);
        };
        let todos = inner
            .todos
            .iter()
            .filter(|t| t.parent_id == list.id)
            .cloned()
            .collect();
        Ok(Some(TodoListWithItems { list, todos }))
    }

    async fn create_list(&self, owner_id: i32, title: &str) -> Result<TodoList, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_list_id += 1;
        let list = TodoList {
            id: inner.next_list_id,
            owner_id,
            title: title.to_owned(),
        };
        inner.lists.push(list.clone());
        Ok(list)
    }

    async fn create_item(&self, list_id: i32, description: &str) -> Result<Todo, AppError> {
        let mut inner = self.inner.lock().unwrap();
        // Matches the referential integrity the database enforces: a dangling
        // parent id is a fault, not a typed outcome.
        if !inner.lists.iter().any(|l| l.id == list_id) {
            return Err(AppError::DatabaseError(format!(
                "foreign key violation: no todo list with id {}",
                list_id
            )));
        }
        inner.next_todo_id += 1;
        let todo = Todo {
            id: inner.next_todo_id,
            parent_id: list_id,
            description: description.to_owned(),
            done: false,
        };
        inner.todos.push(todo.clone());
        Ok(todo)
    }

    async fn update_item_done(
        &self,
        list_id: i32,
        todo_id: i32,
        done: bool,
    ) -> Result<u64, AppError> {
        let mut inner = self.inner.lock().unwrap();
        let mut matched = 0;
        for todo in inner
            .todos
            .iter_mut()
            .filter(|t| t.id == todo_id && t.parent_id == list_id)
        {
            todo.done = done;
            matched += 1;
        }
        Ok(matched)
    }
}
