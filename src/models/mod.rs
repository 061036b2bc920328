pub mod todo;
pub mod user;

pub use todo::{Todo, TodoList, TodoListWithItems};
pub use user::User;
