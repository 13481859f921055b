//! Key-value persistence backends.
//!
//! # Responsibility
//! - Define the backend contract the entity stores persist through.
//! - Isolate SQLite details from store/service orchestration.
//!
//! # Invariants
//! - A collection is stored as one value under one fixed key.
//! - Backends never interpret the payload; serialization lives in the store.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// Persistence key for the todo collection.
pub const TODO_ITEMS_KEY: &str = "TodoItems";
/// Persistence key for the user collection.
pub const USERS_KEY: &str = "Users";

pub type BackendResult<T> = Result<T, BackendError>;

/// Transport-level backend failure.
#[derive(Debug)]
pub enum BackendError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for BackendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for BackendError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Contract every persistence backend implements.
///
/// `get` on an unknown key returns `Ok(None)`; `set` replaces the whole value.
pub trait KvBackend {
    fn get(&self, key: &str) -> BackendResult<Option<Vec<u8>>>;
    fn set(&mut self, key: &str, value: &[u8]) -> BackendResult<()>;
}
