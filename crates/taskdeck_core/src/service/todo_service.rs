//! Todo use-case service.
//!
//! # Responsibility
//! - Provide add/toggle/delete entry points over the persisted todo store.
//! - Enforce title validation before any record reaches the store.
//!
//! # Invariants
//! - Every todo handed to the store satisfies `TodoItem::validate`.
//! - Toggling keeps `is_completed` and `completed_at` consistent.

use crate::model::todo::{TodoId, TodoItem, TodoValidationError};
use crate::storage::{KvBackend, TODO_ITEMS_KEY};
use crate::store::EntityStore;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Use-case wrapper around the persisted todo collection.
pub struct TodoService<B: KvBackend> {
    store: EntityStore<TodoItem, B>,
}

impl<B: KvBackend> TodoService<B> {
    /// Opens the todo store under its fixed persistence key.
    pub fn open(backend: B) -> Self {
        Self {
            store: EntityStore::open(backend, TODO_ITEMS_KEY),
        }
    }

    /// Returns the insertion-ordered todo snapshot.
    pub fn items(&self) -> &[TodoItem] {
        self.store.all()
    }

    /// Adds a pending todo with the given title.
    ///
    /// The title is trimmed before storage.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty.
    pub fn add(&mut self, title: &str) -> Result<TodoId, TodoValidationError> {
        self.add_at(title, Utc::now())
    }

    /// Adds a pending todo with an explicit creation instant.
    pub fn add_at(
        &mut self,
        title: &str,
        created_at: DateTime<Utc>,
    ) -> Result<TodoId, TodoValidationError> {
        let todo = TodoItem::new(title.trim(), created_at);
        todo.validate()?;
        let id = todo.id;
        self.store.add(todo);
        Ok(id)
    }

    /// Toggles completion for the given todo at the current instant.
    pub fn toggle_completion(&mut self, id: TodoId) -> bool {
        self.toggle_completion_at(id, Utc::now())
    }

    /// Toggles completion with an explicit transition instant.
    ///
    /// Returns `false` when the id is unknown (no-op, not an error).
    pub fn toggle_completion_at(&mut self, id: TodoId, now: DateTime<Utc>) -> bool {
        self.store.update(id, |todo| todo.toggle_completion(now))
    }

    /// Removes todos by stable position in a single batch.
    pub fn delete_at(&mut self, positions: &BTreeSet<usize>) {
        self.store.remove_at(positions);
    }
}
