//! Aggregate statistics over todo and user snapshots.
//!
//! # Responsibility
//! - Derive counts, rates, streaks and timing from immutable snapshots.
//! - Keep every computation deterministic for a given snapshot and `as_of`.
//!
//! # Invariants
//! - No function reads the wall clock; "now" and the timezone are injected.
//! - Empty snapshots produce defined fallback values, never errors.

pub mod todo;
pub mod user;

pub use todo::{AverageCompletion, DurationBucket, TodoAnalytics};
pub use user::UserStats;
