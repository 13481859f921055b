//! User domain model.
//!
//! # Responsibility
//! - Define the directory record persisted by the user store.
//!
//! # Invariants
//! - `todo_count` reflects externally-assigned activity; it is never derived
//!   here from the todo collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a user record.
pub type UserId = Uuid;

/// A directory entry with an externally-maintained activity counter.
///
/// Serialized with camelCase keys (`id`, `name`, `email`, `createdAt`,
/// `todoCount`) for persistence compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub todo_count: u32,
}

impl User {
    /// Creates a user with a generated stable ID and zero activity.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, email, created_at, 0)
    }

    /// Creates a user with caller-provided identity and activity count.
    ///
    /// Used by the deterministic seeder, which derives stable IDs itself.
    pub fn with_id(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
        todo_count: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            created_at,
            todo_count,
        }
    }
}
