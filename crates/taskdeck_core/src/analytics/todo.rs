//! Todo snapshot analytics.
//!
//! # Responsibility
//! - Compute completion counts, rates, daily activity, timing and streaks.
//!
//! # Invariants
//! - Identical snapshot + `as_of` + timezone always give identical output.
//! - Calendar-day bucketing happens in the injected timezone, never UTC
//!   implicitly and never the system locale.

use crate::model::todo::TodoItem;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 1_440.0;
const SAME_DAY_BONUS: f64 = 1.2;

/// Magnitude bucket for an average completion duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBucket {
    /// Under one hour.
    Minutes,
    /// One hour to under one day.
    Hours,
    /// One day or more.
    Days,
}

/// Mean time from creation to completion, with its magnitude bucket.
///
/// Formatting is a presentation concern; this exposes the raw value plus the
/// bucket so callers can render "42 min" / "1.5 hrs" / "2.3 days" themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageCompletion {
    /// Raw mean duration in minutes.
    pub minutes: f64,
    pub bucket: DurationBucket,
}

impl AverageCompletion {
    fn from_minutes(minutes: f64) -> Self {
        let bucket = if minutes < MINUTES_PER_HOUR {
            DurationBucket::Minutes
        } else if minutes < MINUTES_PER_DAY {
            DurationBucket::Hours
        } else {
            DurationBucket::Days
        };
        Self { minutes, bucket }
    }

    /// Returns the duration scaled into its bucket's unit.
    pub fn scaled(&self) -> f64 {
        match self.bucket {
            DurationBucket::Minutes => self.minutes,
            DurationBucket::Hours => self.minutes / MINUTES_PER_HOUR,
            DurationBucket::Days => self.minutes / MINUTES_PER_DAY,
        }
    }
}

/// Pure statistics view over a todo snapshot.
///
/// Borrows the snapshot; nothing here mutates or persists.
pub struct TodoAnalytics<'a> {
    todos: &'a [TodoItem],
    as_of: DateTime<Utc>,
    tz: FixedOffset,
}

impl<'a> TodoAnalytics<'a> {
    /// Creates an analytics view with an explicit reference instant and
    /// timezone for calendar-day bucketing.
    pub fn new(todos: &'a [TodoItem], as_of: DateTime<Utc>, tz: FixedOffset) -> Self {
        Self { todos, as_of, tz }
    }

    /// Convenience constructor using the current instant and local offset.
    ///
    /// Tests should prefer [`TodoAnalytics::new`] with fixed inputs.
    pub fn now_local(todos: &'a [TodoItem]) -> Self {
        let now = Utc::now();
        Self::new(todos, now, Local::now().offset().fix())
    }

    pub fn total_count(&self) -> usize {
        self.todos.len()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.total_count() - self.completed_count()
    }

    /// Completion percentage rounded to the nearest integer, in `[0, 100]`.
    ///
    /// Returns 0 for an empty snapshot.
    pub fn completion_rate(&self) -> u32 {
        if self.todos.is_empty() {
            return 0;
        }
        let fraction = self.completed_count() as f64 / self.total_count() as f64;
        (fraction * 100.0).round() as u32
    }

    /// The calendar day `as_of` falls on, in the injected timezone.
    pub fn today(&self) -> NaiveDate {
        self.as_of.with_timezone(&self.tz).date_naive()
    }

    /// Number of todos completed on the given calendar day.
    pub fn completed_on_day(&self, day: NaiveDate) -> usize {
        self.todos
            .iter()
            .filter_map(|todo| todo.completed_at)
            .filter(|completed_at| completed_at.with_timezone(&self.tz).date_naive() == day)
            .count()
    }

    /// Mean creation-to-completion duration over completed todos.
    ///
    /// Returns `None` when nothing has been completed yet.
    pub fn average_completion(&self) -> Option<AverageCompletion> {
        let mut total_minutes = 0.0;
        let mut completed = 0usize;

        for todo in self.todos {
            let Some(completed_at) = todo.completed_at else {
                continue;
            };
            total_minutes += (completed_at - todo.created_at).num_seconds() as f64 / 60.0;
            completed += 1;
        }

        if completed == 0 {
            return None;
        }
        Some(AverageCompletion::from_minutes(
            total_minutes / completed as f64,
        ))
    }

    /// Heuristic score blending completion rate and same-day activity.
    ///
    /// `round(rate_fraction * 100 * bonus)` with a 1.2 bonus when something
    /// was completed today, clamped to `[0, 100]`. 0 for an empty snapshot.
    pub fn productivity_score(&self) -> u32 {
        if self.todos.is_empty() {
            return 0;
        }
        let fraction = self.completed_count() as f64 / self.total_count() as f64;
        let bonus = if self.completed_on_day(self.today()) > 0 {
            SAME_DAY_BONUS
        } else {
            1.0
        };
        (fraction * 100.0 * bonus).round().clamp(0.0, 100.0) as u32
    }

    /// Length of the longest run of consecutive calendar days with at least
    /// one completion.
    ///
    /// Scans completion days in descending order from the most recent one.
    /// A day gap of exactly 1 extends the running streak, a gap above 1
    /// resets it, and repeated completions on one day do not count twice.
    pub fn longest_streak(&self) -> u32 {
        let mut completions: Vec<DateTime<Utc>> =
            self.todos.iter().filter_map(|todo| todo.completed_at).collect();
        if completions.is_empty() {
            return 0;
        }
        completions.sort_unstable_by(|a, b| b.cmp(a));

        let mut previous_day = completions[0].with_timezone(&self.tz).date_naive();
        let mut running = 1u32;
        let mut longest = 1u32;

        for completed_at in &completions[1..] {
            let day = completed_at.with_timezone(&self.tz).date_naive();
            let gap = previous_day.signed_duration_since(day).num_days();

            if gap == 1 {
                running += 1;
                longest = longest.max(running);
            } else if gap > 1 {
                running = 1;
            }
            // gap == 0: same day already counted, streak unchanged.

            previous_day = day;
        }

        longest
    }
}

#[cfg(test)]
mod tests {
    use super::{DurationBucket, TodoAnalytics};
    use crate::model::todo::TodoItem;
    use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn completed(created: DateTime<Utc>, done: DateTime<Utc>) -> TodoItem {
        let mut todo = TodoItem::new("done", created);
        todo.toggle_completion(done);
        todo
    }

    #[test]
    fn empty_snapshot_yields_defined_fallbacks() {
        let analytics = TodoAnalytics::new(&[], noon(2026, 8, 23), utc());
        assert_eq!(analytics.completion_rate(), 0);
        assert_eq!(analytics.productivity_score(), 0);
        assert_eq!(analytics.longest_streak(), 0);
        assert!(analytics.average_completion().is_none());
    }

    #[test]
    fn counts_partition_the_snapshot() {
        let now = noon(2026, 8, 23);
        let todos = vec![
            TodoItem::new("pending", now),
            completed(now - Duration::hours(3), now),
            completed(now - Duration::hours(1), now),
        ];
        let analytics = TodoAnalytics::new(&todos, now, utc());
        assert_eq!(
            analytics.completed_count() + analytics.pending_count(),
            analytics.total_count()
        );
    }

    #[test]
    fn duration_buckets_split_at_hour_and_day() {
        let now = noon(2026, 8, 23);

        let short = vec![completed(now - Duration::minutes(45), now)];
        let analytics = TodoAnalytics::new(&short, now, utc());
        let avg = analytics.average_completion().unwrap();
        assert_eq!(avg.bucket, DurationBucket::Minutes);
        assert!((avg.scaled() - 45.0).abs() < 1e-9);

        let long = vec![completed(now - Duration::days(3), now)];
        let analytics = TodoAnalytics::new(&long, now, utc());
        let avg = analytics.average_completion().unwrap();
        assert_eq!(avg.bucket, DurationBucket::Days);
        assert!((avg.scaled() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn same_day_completions_do_not_extend_streak() {
        let now = noon(2026, 8, 23);
        let todos = vec![
            completed(now - Duration::days(2), now),
            completed(now - Duration::days(2), now - Duration::hours(2)),
        ];
        let analytics = TodoAnalytics::new(&todos, now, utc());
        assert_eq!(analytics.longest_streak(), 1);
    }

    #[test]
    fn day_bucketing_respects_injected_timezone() {
        // 2026-08-22 23:30 UTC is already 2026-08-23 in UTC+2.
        let completed_at = Utc.with_ymd_and_hms(2026, 8, 22, 23, 30, 0).unwrap();
        let todos = vec![completed(completed_at - Duration::hours(1), completed_at)];

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let analytics = TodoAnalytics::new(&todos, completed_at, plus_two);
        let day = chrono::NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        assert_eq!(analytics.completed_on_day(day), 1);

        let analytics_utc = TodoAnalytics::new(&todos, completed_at, utc());
        assert_eq!(analytics_utc.completed_on_day(day), 0);
    }
}
