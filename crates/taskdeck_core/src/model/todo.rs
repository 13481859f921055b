//! Todo domain model.
//!
//! # Responsibility
//! - Define the todo record shared by store, services and analytics.
//! - Provide completion lifecycle helpers that keep timestamps consistent.
//!
//! # Invariants
//! - `completed_at` is `Some` if and only if `is_completed` is `true`.
//! - `completed_at >= created_at` when present.
//! - `title` is non-empty after trimming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a todo record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// A task record with completion state and timestamps.
///
/// Serialized with camelCase keys so persisted JSON matches the external
/// schema exactly (`id`, `title`, `isCompleted`, `createdAt`, `completedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Stable global ID used for lookup and persistence round-trips.
    pub id: TodoId,
    /// Task title. Must be non-empty after trimming.
    pub title: String,
    /// Completion flag; source of truth alongside `completed_at`.
    pub is_completed: bool,
    /// Creation instant, ISO-8601 in persisted form.
    pub created_at: DateTime<Utc>,
    /// Completion instant; `Some` exactly when `is_completed`.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Validation failure for a todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// `is_completed` and `completed_at` disagree.
    CompletionStateMismatch,
    /// `completed_at` is earlier than `created_at`.
    CompletedBeforeCreated,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "todo title cannot be empty"),
            Self::CompletionStateMismatch => {
                write!(f, "completed_at must be set exactly when is_completed is true")
            }
            Self::CompletedBeforeCreated => {
                write!(f, "completed_at cannot be earlier than created_at")
            }
        }
    }
}

impl Error for TodoValidationError {}

impl TodoItem {
    /// Creates a pending todo with a generated stable ID.
    ///
    /// # Invariants
    /// - Starts with `is_completed = false` and `completed_at = None`.
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4(), title, created_at)
    }

    /// Creates a pending todo with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TodoId, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            is_completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Checks record invariants.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty.
    /// - `CompletionStateMismatch` when flag and timestamp disagree.
    /// - `CompletedBeforeCreated` when the completion instant predates creation.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        if self.is_completed != self.completed_at.is_some() {
            return Err(TodoValidationError::CompletionStateMismatch);
        }
        if let Some(completed_at) = self.completed_at {
            if completed_at < self.created_at {
                return Err(TodoValidationError::CompletedBeforeCreated);
            }
        }
        Ok(())
    }

    /// Flips completion state, stamping or clearing `completed_at`.
    ///
    /// # Contract
    /// - Transition to complete sets `completed_at = Some(now)`.
    /// - Transition to pending clears `completed_at`.
    pub fn toggle_completion(&mut self, now: DateTime<Utc>) {
        if self.is_completed {
            self.is_completed = false;
            self.completed_at = None;
        } else {
            self.is_completed = true;
            self.completed_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TodoItem, TodoValidationError};
    use chrono::{Duration, Utc};

    #[test]
    fn new_todo_is_pending() {
        let todo = TodoItem::new("write report", Utc::now());
        assert!(!todo.is_completed);
        assert!(todo.completed_at.is_none());
        todo.validate().expect("fresh todo should be valid");
    }

    #[test]
    fn validate_rejects_blank_title() {
        let todo = TodoItem::new("   ", Utc::now());
        assert_eq!(todo.validate(), Err(TodoValidationError::EmptyTitle));
    }

    #[test]
    fn validate_rejects_flag_timestamp_mismatch() {
        let mut todo = TodoItem::new("mismatch", Utc::now());
        todo.is_completed = true;
        assert_eq!(
            todo.validate(),
            Err(TodoValidationError::CompletionStateMismatch)
        );
    }

    #[test]
    fn validate_rejects_completion_before_creation() {
        let created = Utc::now();
        let mut todo = TodoItem::new("time travel", created);
        todo.is_completed = true;
        todo.completed_at = Some(created - Duration::minutes(5));
        assert_eq!(
            todo.validate(),
            Err(TodoValidationError::CompletedBeforeCreated)
        );
    }

    #[test]
    fn toggle_sets_and_clears_completed_at() {
        let created = Utc::now();
        let mut todo = TodoItem::new("toggle me", created);

        let done_at = created + Duration::minutes(30);
        todo.toggle_completion(done_at);
        assert!(todo.is_completed);
        assert_eq!(todo.completed_at, Some(done_at));
        todo.validate().expect("completed todo should be valid");

        todo.toggle_completion(done_at + Duration::minutes(1));
        assert!(!todo.is_completed);
        assert!(todo.completed_at.is_none());
        todo.validate().expect("reopened todo should be valid");
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let todo = TodoItem::new("shape check", Utc::now());
        let json = serde_json::to_value(&todo).expect("todo should serialize");
        let object = json.as_object().expect("todo serializes to an object");
        assert!(object.contains_key("isCompleted"));
        assert!(object.contains_key("createdAt"));
        assert!(object.contains_key("completedAt"));
        assert!(object["id"].is_string());
    }
}
