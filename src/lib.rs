#![doc = "The `dinglist` library crate."]
#![doc = ""]
#![doc = "A minimal multi-user todo-list web application: registration, password"]
#![doc = "login with session cookies, and per-user CRUD over todo lists and their"]
#![doc = "items. The library holds the store abstraction, the two access-layer"]
#![doc = "services, the session-gated authorization flow, routing and page"]
#![doc = "rendering; the binary (`main.rs`) wires it to Postgres and runs the"]
#![doc = "server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use services::{TodoListService, UserService};
use store::Store;

/// Shared application state handed to every handler.
///
/// Both services hold the same store; `store` is also exposed directly for
/// the login gate, which resolves the session's user id to a `User` record.
pub struct AppState {
    pub users: UserService,
    pub todo_lists: TodoListService,
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            users: UserService::new(store.clone()),
            todo_lists: TodoListService::new(store.clone()),
            store,
        }
    }
}
