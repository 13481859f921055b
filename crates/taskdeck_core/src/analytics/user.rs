//! User directory statistics.
//!
//! # Invariants
//! - "Active" means a non-zero assigned `todo_count`, nothing time-based.
//! - Recency windows are anchored to the injected `as_of`, not the wall clock.

use crate::model::user::User;
use chrono::{DateTime, Duration, Utc};

/// Pure statistics view over a user snapshot.
pub struct UserStats<'a> {
    users: &'a [User],
    as_of: DateTime<Utc>,
}

impl<'a> UserStats<'a> {
    pub fn new(users: &'a [User], as_of: DateTime<Utc>) -> Self {
        Self { users, as_of }
    }

    pub fn total(&self) -> usize {
        self.users.len()
    }

    /// Users with at least one assigned todo.
    pub fn active(&self) -> usize {
        self.users.iter().filter(|user| user.todo_count > 0).count()
    }

    pub fn inactive(&self) -> usize {
        self.total() - self.active()
    }

    /// Users created within the trailing `days`-day window ending at `as_of`.
    pub fn new_within_days(&self, days: i64) -> usize {
        let cutoff = self.as_of - Duration::days(days);
        self.users
            .iter()
            .filter(|user| user.created_at >= cutoff)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::UserStats;
    use crate::model::user::User;
    use chrono::{Duration, Utc};

    #[test]
    fn active_counts_nonzero_todo_counts() {
        let now = Utc::now();
        let mut idle = User::new("Idle", "idle@example.com", now);
        idle.todo_count = 0;
        let mut busy = User::new("Busy", "busy@example.com", now);
        busy.todo_count = 7;

        let users = vec![idle, busy];
        let stats = UserStats::new(&users, now);
        assert_eq!(stats.total(), 2);
        assert_eq!(stats.active(), 1);
        assert_eq!(stats.inactive(), 1);
    }

    #[test]
    fn recency_window_is_inclusive_of_cutoff() {
        let now = Utc::now();
        let users = vec![
            User::new("Old", "old@example.com", now - Duration::days(30)),
            User::new("Edge", "edge@example.com", now - Duration::days(7)),
            User::new("Fresh", "fresh@example.com", now - Duration::days(1)),
        ];
        let stats = UserStats::new(&users, now);
        assert_eq!(stats.new_within_days(7), 2);
    }
}
