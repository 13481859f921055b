//! Domain model for todo and user records.
//!
//! # Responsibility
//! - Define the canonical data structures persisted by the entity stores.
//! - Keep serialization shapes stable for persistence compatibility.
//!
//! # Invariants
//! - Every record is identified by a stable UUID that is never reused.
//! - Field names round-trip exactly as camelCase JSON keys.

pub mod todo;
pub mod user;
