pub mod todo_list;
pub mod user;

pub use todo_list::TodoListService;
pub use user::{Login, Registration, UserService};
