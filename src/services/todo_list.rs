//!
//! # Todo List Access Layer
//!
//! Ownership-scoped CRUD over lists and items. Ownership is always re-derived
//! from the store; caller-supplied ids are never trusted for authorization.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::{Todo, TodoList, TodoListWithItems};
use crate::store::Store;

#[derive(Clone)]
pub struct TodoListService {
    store: Arc<dyn Store>,
}

impl TodoListService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// All lists owned by `user_id`, in store order.
    pub async fn lists_for_user(&self, user_id: i32) -> Result<Vec<TodoList>, AppError> {
        self.store.find_lists_by_owner(user_id).await
    }

    /// Fetch a list with its items, but only for its owner.
    ///
    /// Returns `None` both when the list does not exist and when it belongs
    /// to someone else; the two cases are indistinguishable to the caller so
    /// foreign lists do not leak their existence.
    pub async fn owned_list(
        &self,
        list_id: i32,
        user_id: i32,
    ) -> Result<Option<TodoListWithItems>, AppError> {
        let Some(list) = self.store.find_list_by_id(list_id).await? else {
            return Ok(None);
        };
        if list.list.owner_id != user_id {
            return Ok(None);
        }
        Ok(Some(list))
    }

    pub async fn create_list(&self, owner_id: i32, title: &str) -> Result<TodoList, AppError> {
        self.store.create_list(owner_id, title).await
    }

    /// Create an item under `list_id`.
    ///
    /// Does not re-check that the list exists: callers confirm ownership via
    /// `owned_list` first, and a dangling id between the two calls is a store
    /// fault. The check-then-act pair is not transactional; a concurrent
    /// deletion of the list in between is an accepted race.
    pub async fn add_item(&self, list_id: i32, description: &str) -> Result<Todo, AppError> {
        self.store.create_item(list_id, description).await
    }

    /// Set `done` on the item matching both ids in one conditional update.
    ///
    /// `false` means no item with `todo_id` exists under `list_id`; callers
    /// must map that to a not-found outcome, never to silent success.
    pub async fn set_item_done(
        &self,
        list_id: i32,
        todo_id: i32,
        done: bool,
    ) -> Result<bool, AppError> {
        let matched = self.store.update_item_done(list_id, todo_id, done).await?;
        Ok(matched == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CreateUserOutcome, MemoryStore};
    use pretty_assertions::assert_eq;

    async fn seed_user(store: &dyn Store, username: &str) -> i32 {
        match store.create_user(username, "irrelevant").await.unwrap() {
            CreateUserOutcome::Created(user) => user.id,
            CreateUserOutcome::UniqueViolation => panic!("fixture username taken"),
        }
    }

    fn service() -> (TodoListService, Arc<dyn Store>) {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        (TodoListService::new(store.clone()), store)
    }

    #[actix_rt::test]
    async fn foreign_and_missing_lists_are_indistinguishable() {
        let (lists, store) = service();
        let alice = seed_user(store.as_ref(), "alice").await;
        let bob = seed_user(store.as_ref(), "bob").await;

        let groceries = lists.create_list(alice, "Groceries").await.unwrap();

        assert!(lists.owned_list(groceries.id, alice).await.unwrap().is_some());
        // Bob sees exactly what he would see for a list that does not exist.
        assert_eq!(lists.owned_list(groceries.id, bob).await.unwrap(), None);
        assert_eq!(lists.owned_list(9999, bob).await.unwrap(), None);
    }

    #[actix_rt::test]
    async fn lists_are_scoped_to_their_owner() {
        let (lists, store) = service();
        let alice = seed_user(store.as_ref(), "alice").await;
        let bob = seed_user(store.as_ref(), "bob").await;

        lists.create_list(alice, "Groceries").await.unwrap();
        lists.create_list(bob, "Chores").await.unwrap();
        lists.create_list(alice, "Errands").await.unwrap();

        let mine = lists.lists_for_user(alice).await.unwrap();
        let titles: Vec<&str> = mine.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Groceries", "Errands"]);
    }

    #[actix_rt::test]
    async fn set_item_done_matches_both_ids() {
        let (lists, store) = service();
        let alice = seed_user(store.as_ref(), "alice").await;

        let groceries = lists.create_list(alice, "Groceries").await.unwrap();
        let errands = lists.create_list(alice, "Errands").await.unwrap();
        let milk = lists.add_item(groceries.id, "milk").await.unwrap();

        // Mismatched pair: no mutation, reported as unmatched.
        assert!(!lists.set_item_done(errands.id, milk.id, true).await.unwrap());
        let fetched = lists.owned_list(groceries.id, alice).await.unwrap().unwrap();
        assert!(!fetched.todos[0].done);

        assert!(lists.set_item_done(groceries.id, milk.id, true).await.unwrap());
        let fetched = lists.owned_list(groceries.id, alice).await.unwrap().unwrap();
        assert!(fetched.todos[0].done);
    }

    #[actix_rt::test]
    async fn set_item_done_is_idempotent() {
        let (lists, store) = service();
        let alice = seed_user(store.as_ref(), "alice").await;

        let groceries = lists.create_list(alice, "Groceries").await.unwrap();
        let milk = lists.add_item(groceries.id, "milk").await.unwrap();

        assert!(lists.set_item_done(groceries.id, milk.id, true).await.unwrap());
        assert!(lists.set_item_done(groceries.id, milk.id, true).await.unwrap());

        let fetched = lists.owned_list(groceries.id, alice).await.unwrap().unwrap();
        assert!(fetched.todos[0].done);
    }
}
