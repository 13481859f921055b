//! Persisted collection layer.
//!
//! # Responsibility
//! - Keep each collection in memory as an insertion-ordered sequence.
//! - Persist the full collection through an injected backend on every mutation.
//!
//! # Invariants
//! - "mutation + persist" is one unit of work; no mutation skips the write.
//! - Persistence failures are logged and dropped, never retried or raised.

pub mod entity_store;

pub use entity_store::{EntityStore, Record};
