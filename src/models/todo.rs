use sqlx::FromRow;

/// A todo list owned by exactly one user.
///
/// `owner_id` is immutable after creation; every read or write of the list and
/// its items is gated on it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TodoList {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
}

/// A single item under a todo list.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Todo {
    pub id: i32,
    pub parent_id: i32,
    pub description: String,
    pub done: bool,
}

/// A todo list fetched together with its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListWithItems {
    pub list: TodoList,
    pub todos: Vec<Todo>,
}
