//! Interval-based review scheduler.
//!
//! The canonical scheduling policy: each proficiency level maps to a fixed
//! interval in days, counted from the date the review (or registration)
//! happened. A successful review therefore always moves `next_review_at`
//! forward of the review date.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, NaiveDate, Utc};

use super::SchedulingProvider;
use crate::error::{Result, ValidationError};
use crate::problem::{Level, NewProblem, Problem};

/// Days until the next review for a given level.
fn interval_days(level: Level) -> i64 {
    match level {
        Level::Again => 1,
        Level::Hard => 3,
        Level::Good => 7,
        Level::Easy => 30,
    }
}

/// Next review date counted from `from`.
pub fn next_review_after(from: NaiveDate, level: Level) -> NaiveDate {
    from + Duration::days(interval_days(level))
}

/// Fixed-interval scheduling provider.
///
/// Ids are epoch-milliseconds at creation, bumped to stay strictly
/// increasing per scheduler instance so two registrations landing in the
/// same millisecond can never collide.
#[derive(Debug, Default)]
pub struct SrsScheduler {
    last_id: AtomicI64,
}

impl SrsScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        self.last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_ms.max(last + 1))
            })
            // The closure always returns Some, so fetch_update cannot fail.
            .map(|last| now_ms.max(last + 1))
            .unwrap_or(now_ms)
    }

    /// Date-explicit creation; the trait method uses the current date.
    pub fn create_on(&self, today: NaiveDate, input: NewProblem) -> Result<Problem> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let url = input
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        let tags: Vec<String> = input
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Problem {
            id: self.next_id(),
            name,
            url,
            tags,
            memo: input.memo,
            level: input.level,
            created_at: today,
            next_review_at: next_review_after(today, input.level),
        })
    }

    /// Date-explicit review transition; the trait method uses the current
    /// date.
    pub fn transition_on(
        &self,
        today: NaiveDate,
        problem: &Problem,
        outcome: Level,
    ) -> Result<Problem> {
        Ok(Problem {
            level: outcome,
            next_review_at: next_review_after(today, outcome),
            ..problem.clone()
        })
    }
}

impl SchedulingProvider for SrsScheduler {
    fn create(&self, input: NewProblem) -> Result<Problem> {
        self.create_on(Utc::now().date_naive(), input)
    }

    fn transition(&self, problem: &Problem, outcome: Level) -> Result<Problem> {
        self.transition_on(Utc::now().date_naive(), problem, outcome)
    }
}
