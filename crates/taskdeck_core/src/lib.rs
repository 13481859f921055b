//! Core domain logic for TaskDeck.
//! This crate is the single source of truth for business invariants.

pub mod analytics;
pub mod logging;
pub mod model;
pub mod refresh;
pub mod seed;
pub mod service;
pub mod settings;
pub mod storage;
pub mod store;

pub use analytics::{AverageCompletion, DurationBucket, TodoAnalytics, UserStats};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{TodoId, TodoItem, TodoValidationError};
pub use model::user::{User, UserId};
pub use refresh::{RefreshHandle, RefreshOutcome, DEFAULT_REFRESH_DELAY};
pub use seed::seed_users;
pub use service::{TodoService, UserService};
pub use settings::{AppTheme, SettingsStore};
pub use storage::{
    BackendError, BackendResult, KvBackend, MemoryBackend, SqliteBackend, TODO_ITEMS_KEY,
    USERS_KEY,
};
pub use store::{EntityStore, Record};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
