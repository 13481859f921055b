//! Deterministic sample users for first launch.
//!
//! # Responsibility
//! - Produce a fixed directory of users spaced across the past month.
//!
//! # Invariants
//! - Same `now` in, same records out: ids are UUIDv5 over the email, so
//!   seeding twice never mints new identities.

use crate::model::user::User;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Name, email, age of the account in days, assigned todo count.
const SAMPLE_USERS: &[(&str, &str, i64, u32)] = &[
    ("Alice Johnson", "alice@example.com", 30, 12),
    ("Bob Smith", "bob@example.com", 25, 8),
    ("Carol Davis", "carol@example.com", 20, 15),
    ("David Wilson", "david@example.com", 15, 5),
    ("Emma Brown", "emma@example.com", 10, 20),
    ("Frank Miller", "frank@example.com", 5, 3),
    ("Grace Lee", "grace@example.com", 3, 7),
    ("Henry Taylor", "henry@example.com", 2, 0),
    ("Iris Chen", "iris@example.com", 1, 4),
    ("Jack Martinez", "jack@example.com", 0, 0),
];

/// Builds the sample user directory, newest account last.
pub fn seed_users(now: DateTime<Utc>) -> Vec<User> {
    SAMPLE_USERS
        .iter()
        .map(|&(name, email, days_ago, todo_count)| {
            User::with_id(
                Uuid::new_v5(&Uuid::NAMESPACE_URL, email.as_bytes()),
                name,
                email,
                now - Duration::days(days_ago),
                todo_count,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::seed_users;
    use chrono::Utc;
    use std::collections::HashSet;

    #[test]
    fn seeding_is_deterministic() {
        let now = Utc::now();
        assert_eq!(seed_users(now), seed_users(now));
    }

    #[test]
    fn seeded_ids_are_unique() {
        let users = seed_users(Utc::now());
        let ids: HashSet<_> = users.iter().map(|user| user.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn seeds_span_the_past_month() {
        let now = Utc::now();
        let users = seed_users(now);
        assert_eq!(users.len(), 10);
        assert!(users.iter().all(|user| user.created_at <= now));
        assert_eq!(users.last().unwrap().created_at, now);
    }
}
