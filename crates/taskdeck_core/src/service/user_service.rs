//! User directory service.
//!
//! # Responsibility
//! - Provide add/update entry points over the persisted user store.
//! - Seed the deterministic sample directory on first launch.
//!
//! # Invariants
//! - Seeding runs only when the loaded collection is empty at open time.
//! - `todo_count` is assigned by callers; this service never derives it.

use crate::model::user::{User, UserId};
use crate::seed::seed_users;
use crate::storage::{KvBackend, USERS_KEY};
use crate::store::EntityStore;
use chrono::{DateTime, Utc};
use log::info;

/// Use-case wrapper around the persisted user collection.
pub struct UserService<B: KvBackend> {
    store: EntityStore<User, B>,
}

impl<B: KvBackend> UserService<B> {
    /// Opens the user store, seeding sample users when it is empty.
    pub fn open(backend: B) -> Self {
        Self::open_at(backend, Utc::now())
    }

    /// Opens the user store with an explicit seeding reference instant.
    pub fn open_at(backend: B, now: DateTime<Utc>) -> Self {
        let mut store = EntityStore::open(backend, USERS_KEY);
        if store.is_empty() {
            let seeded = seed_users(now);
            info!(
                "event=user_seed module=service status=ok count={}",
                seeded.len()
            );
            store.replace_all(seeded);
        }
        Self { store }
    }

    /// Returns the insertion-ordered user snapshot.
    pub fn users(&self) -> &[User] {
        self.store.all()
    }

    /// Adds a user with zero activity.
    pub fn add_user(&mut self, name: &str, email: &str) -> UserId {
        self.add_user_at(name, email, Utc::now())
    }

    /// Adds a user with an explicit creation instant.
    pub fn add_user_at(&mut self, name: &str, email: &str, created_at: DateTime<Utc>) -> UserId {
        let user = User::new(name, email, created_at);
        let id = user.id;
        self.store.add(user);
        id
    }

    /// Assigns a new todo count to the given user.
    ///
    /// Returns `false` when the id is unknown (no-op, not an error).
    pub fn update_todo_count(&mut self, id: UserId, count: u32) -> bool {
        self.store.update(id, |user| user.todo_count = count)
    }
}
